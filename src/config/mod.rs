// SPDX-License-Identifier: MPL-2.0
//! This module handles the design-system configuration, including loading and
//! saving it as a `ui.toml` file.
//!
//! Only `theme`, `theme_mode` and the toast capacity/duration are consumed by
//! the core; the remaining fields are carried for the view layer.
//!
//! # Examples
//!
//! ```no_run
//! use glacier_ui::config::{self, UiConfig};
//! use std::path::PathBuf;
//!
//! // Load existing configuration (defaults and a warning on failure)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.toast.max_count = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("ui.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded.toast.max_count, Some(3));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use crate::sink::{ToastPlacement, ToastPosition};
use crate::theme::{ThemeMode, ThemePatch};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "ui.toml";
const APP_NAME: &str = "GlacierUI";

/// Toast manager settings. Omitted fields fall back to [`defaults`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_duration_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<ToastPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<f32>,
}

impl ToastConfig {
    /// Resolved capacity, never below [`MIN_TOAST_MAX_COUNT`].
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.max_count
            .unwrap_or(DEFAULT_TOAST_MAX_COUNT)
            .max(MIN_TOAST_MAX_COUNT)
    }

    /// Resolved auto-dismiss duration; zero disables auto-dismiss.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(
            self.default_duration_ms
                .unwrap_or(DEFAULT_TOAST_DURATION_MS),
        )
    }

    #[must_use]
    pub fn placement(&self) -> ToastPlacement {
        ToastPlacement {
            position: self.position.unwrap_or(DEFAULT_TOAST_POSITION),
            offset: self.offset.unwrap_or(DEFAULT_TOAST_OFFSET).max(0.0),
        }
    }

    /// Same settings with every field filled in.
    #[must_use]
    pub fn resolved(&self) -> Self {
        if self.max_count.is_some_and(|count| count < MIN_TOAST_MAX_COUNT) {
            tracing::warn!(
                requested = ?self.max_count,
                clamped = MIN_TOAST_MAX_COUNT,
                "toast max_count below minimum"
            );
        }
        let placement = self.placement();
        Self {
            max_count: Some(self.max_count()),
            default_duration_ms: Some(
                self.default_duration_ms
                    .unwrap_or(DEFAULT_TOAST_DURATION_MS),
            ),
            position: Some(placement.position),
            offset: Some(placement.offset),
        }
    }
}

/// Enter/leave transition settings for the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    pub enabled: bool,
    pub duration_ms: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_ANIMATION_ENABLED,
            duration_ms: DEFAULT_ANIMATION_DURATION_MS,
        }
    }
}

/// Accessibility preferences for the view layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct A11yConfig {
    pub reduced_motion: bool,
    /// Whether toasts should be announced to assistive technology.
    pub announce_toasts: bool,
}

impl Default for A11yConfig {
    fn default() -> Self {
        Self {
            reduced_motion: false,
            announce_toasts: true,
        }
    }
}

/// Configuration accepted at initialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Partial theme merged over the preset chosen by `theme_mode`.
    #[serde(skip_serializing_if = "ThemePatch::is_empty")]
    pub theme: ThemePatch,
    pub theme_mode: ThemeMode,
    /// Icon name to glyph overrides.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub icons: BTreeMap<String, String>,
    pub toast: ToastConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Message key to translated text overrides.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub i18n: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<u32>,
    pub animation: AnimationConfig,
    pub a11y: A11yConfig,
}

impl UiConfig {
    /// Stacking order for overlays.
    #[must_use]
    pub fn z_index(&self) -> u32 {
        self.z_index.unwrap_or(DEFAULT_Z_INDEX)
    }
}

/// Fills every defaulted field of `partial`.
///
/// `create_ui_config(UiConfig { theme, ..Default::default() })` yields a toast
/// capacity of 5 and a default duration of 3000 ms.
#[must_use]
pub fn create_ui_config(partial: UiConfig) -> UiConfig {
    UiConfig {
        toast: partial.toast.resolved(),
        z_index: Some(partial.z_index()),
        ..partial
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the user configuration from the platform config directory.
///
/// Never fails: a missing file yields defaults, and an unreadable or invalid
/// file yields defaults plus a warning describing the problem.
#[must_use]
pub fn load() -> (UiConfig, Option<String>) {
    let Some(path) = get_default_config_path() else {
        return (UiConfig::default(), None);
    };
    if !path.exists() {
        return (UiConfig::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            let warning = format!("{}: {err}", path.display());
            tracing::warn!(path = %path.display(), error = %err, "falling back to default UI config");
            (UiConfig::default(), Some(warning))
        }
    }
}

pub fn save(config: &UiConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<UiConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

pub fn save_to_path(config: &UiConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
