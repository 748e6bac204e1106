// SPDX-License-Identifier: MPL-2.0
//! Bootstrap bundle tying configuration, registry and toasts together.

use crate::config::{create_ui_config, UiConfig};
use crate::registry::ConfigRegistry;
use crate::sink::ToastLayer;
use crate::theme::{Theme, ThemeMode};
use crate::toast::{Clock, SystemClock, ToastManager};
use std::rc::Rc;

/// The design-system services for one application.
///
/// Build it once at startup and hand out references; views read the theme
/// through [`registry`](Self::registry), application code raises toasts
/// through [`toasts_mut`](Self::toasts_mut).
#[derive(Debug)]
pub struct UiRuntime {
    config: UiConfig,
    registry: Rc<ConfigRegistry>,
    toasts: ToastManager,
}

impl UiRuntime {
    #[must_use]
    pub fn new(config: UiConfig) -> Self {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    /// Runtime whose toast expiry follows `clock`.
    #[must_use]
    pub fn with_clock(config: UiConfig, clock: Rc<dyn Clock>) -> Self {
        let config = create_ui_config(config);
        let registry = Rc::new(ConfigRegistry::new());
        Self::configure_registry(&registry, &config);
        let toasts = ToastManager::with_clock(Rc::clone(&registry), config.toast.clone(), clock);
        tracing::debug!(
            mode = %config.theme_mode,
            max_count = config.toast.max_count(),
            "ui runtime initialized"
        );
        Self {
            config,
            registry,
            toasts,
        }
    }

    fn configure_registry(registry: &ConfigRegistry, config: &UiConfig) {
        registry.set_theme_mode(config.theme_mode);
        registry.register_theme(config.theme.clone());
    }

    /// The resolved configuration this runtime was built from.
    #[must_use]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &Rc<ConfigRegistry> {
        &self.registry
    }

    /// Current theme snapshot.
    #[must_use]
    pub fn theme(&self) -> Rc<Theme> {
        self.registry.theme()
    }

    /// Switches the base preset, keeping registered theme patches.
    pub fn set_theme_mode(&mut self, mode: ThemeMode) {
        self.config.theme_mode = mode;
        self.registry.set_theme_mode(mode);
    }

    #[must_use]
    pub fn toasts(&self) -> &ToastManager {
        &self.toasts
    }

    pub fn toasts_mut(&mut self) -> &mut ToastManager {
        &mut self.toasts
    }

    /// The layer the default sink mounts into.
    #[must_use]
    pub fn toast_layer(&self) -> &ToastLayer {
        self.registry.default_layer()
    }

    /// Returns every service to the state it had right after construction.
    pub fn reset(&mut self) {
        self.registry.reset();
        Self::configure_registry(&self.registry, &self.config);
        self.toasts.set_config(self.config.toast.clone());
        self.toasts.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ToastConfig;
    use crate::sink::NoopSink;
    use crate::theme::{Color, ThemePatch, TooltipPatch};
    use crate::toast::ToastOptions;
    use pretty_assertions::assert_eq;

    fn tooltip_patch() -> ThemePatch {
        ThemePatch {
            tooltip: Some(TooltipPatch {
                max_width: Some(320.0),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn new_applies_config_theme_over_mode_preset() {
        let runtime = UiRuntime::new(UiConfig {
            theme: tooltip_patch(),
            theme_mode: ThemeMode::Dark,
            ..Default::default()
        });

        let theme = runtime.theme();
        assert!(theme.dark);
        assert_eq!(theme.tooltip.max_width, 320.0);
        assert_eq!(theme.tooltip.background, Theme::dark().tooltip.background);
    }

    #[test]
    fn new_resolves_toast_defaults() {
        let runtime = UiRuntime::new(UiConfig::default());
        assert_eq!(runtime.config().toast.max_count, Some(5));
        assert_eq!(runtime.toasts().config().default_duration_ms, Some(3000));
    }

    #[test]
    fn toasts_mount_into_runtime_layer() {
        let mut runtime = UiRuntime::new(UiConfig::default());
        runtime.toasts_mut().info("hello", ToastOptions::new());
        assert_eq!(runtime.toast_layer().len(), 1);
    }

    #[test]
    fn reset_restores_configured_state() {
        let mut runtime = UiRuntime::new(UiConfig {
            theme: tooltip_patch(),
            toast: ToastConfig {
                max_count: Some(2),
                ..Default::default()
            },
            ..Default::default()
        });
        runtime.registry().register_theme(ThemePatch {
            tooltip: Some(TooltipPatch {
                text: Some(Color::rgb8(0xff, 0, 0)),
                ..Default::default()
            }),
            ..Default::default()
        });
        runtime.registry().register_render_function(NoopSink);
        runtime.toasts_mut().set_config(ToastConfig::default());
        runtime.toasts_mut().info("stale", ToastOptions::new());

        runtime.reset();

        let theme = runtime.theme();
        assert_eq!(theme.tooltip.max_width, 320.0);
        assert_eq!(theme.tooltip.text, Theme::light().tooltip.text);
        assert!(runtime.toasts().is_empty());
        assert_eq!(runtime.toasts().config().max_count, Some(2));
        runtime.toasts_mut().info("fresh", ToastOptions::new());
        assert_eq!(runtime.toast_layer().len(), 1);
    }

    #[test]
    fn set_theme_mode_updates_config_and_theme() {
        let mut runtime = UiRuntime::new(UiConfig::default());
        runtime.set_theme_mode(ThemeMode::Dark);
        assert_eq!(runtime.config().theme_mode, ThemeMode::Dark);
        assert!(runtime.theme().dark);
    }
}
