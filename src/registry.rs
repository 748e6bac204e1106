// SPDX-License-Identifier: MPL-2.0
//! Process-wide theme and mount configuration, held in an injectable service.
//!
//! A [`ConfigRegistry`] is built once at bootstrap (usually by
//! [`UiRuntime`](crate::runtime::UiRuntime)) and shared by `Rc` handle. It
//! always holds a usable theme and a usable sink, so reading it before any
//! registration is safe.

use crate::sink::{ToastLayer, ToastSink};
use crate::theme::{Patchable, Theme, ThemeMode, ThemePatch};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

struct RegistryState {
    mode: ThemeMode,
    /// Every registered patch folded together, replayed on mode switches.
    overrides: ThemePatch,
    theme: Rc<Theme>,
    sink: Rc<dyn ToastSink>,
}

impl RegistryState {
    fn new(default_layer: &ToastLayer) -> Self {
        Self {
            mode: ThemeMode::default(),
            overrides: ThemePatch::default(),
            theme: Rc::new(Theme::default()),
            sink: Rc::new(default_layer.clone()),
        }
    }
}

/// Holds the canonical [`Theme`] and the active [`ToastSink`].
pub struct ConfigRegistry {
    state: RefCell<RegistryState>,
    default_layer: ToastLayer,
}

impl ConfigRegistry {
    /// Registry with the light theme and a fresh [`ToastLayer`] as sink.
    #[must_use]
    pub fn new() -> Self {
        let default_layer = ToastLayer::new();
        Self {
            state: RefCell::new(RegistryState::new(&default_layer)),
            default_layer,
        }
    }

    /// Deep-merges `patch` into the canonical theme.
    ///
    /// Tokens present in the patch take its value at any depth; everything
    /// else keeps its current value. `Vec` tokens are replaced as a whole.
    /// Components that already rendered pick the change up on their next
    /// `view`.
    pub fn register_theme(&self, patch: ThemePatch) {
        if patch.is_empty() {
            return;
        }
        let mut state = self.state.borrow_mut();
        Rc::make_mut(&mut state.theme).apply(patch.clone());
        state.overrides.merge(patch);
        tracing::debug!(mode = %state.mode, "theme patch registered");
    }

    /// Snapshot of the current theme.
    ///
    /// Later registrations never mutate a snapshot already handed out.
    #[must_use]
    pub fn theme(&self) -> Rc<Theme> {
        Rc::clone(&self.state.borrow().theme)
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.state.borrow().mode
    }

    /// Rebuilds the theme from the preset for `mode`, then replays every
    /// registered patch so branding survives a light/dark switch.
    pub fn set_theme_mode(&self, mode: ThemeMode) {
        let mut state = self.state.borrow_mut();
        let mut theme = Theme::for_mode(mode);
        theme.apply(state.overrides.clone());
        state.theme = Rc::new(theme);
        state.mode = mode;
        tracing::debug!(%mode, "theme mode changed");
    }

    /// Replaces the active sink. Content already mounted is not re-mounted;
    /// the new sink receives the next frame.
    pub fn register_render_function(&self, sink: impl ToastSink + 'static) {
        self.register_render_function_rc(Rc::new(sink));
    }

    /// Same as [`register_render_function`](Self::register_render_function)
    /// for a sink that is already shared.
    pub fn register_render_function_rc(&self, sink: Rc<dyn ToastSink>) {
        self.state.borrow_mut().sink = sink;
        tracing::debug!("toast render function replaced");
    }

    /// The active sink.
    #[must_use]
    pub fn render_function(&self) -> Rc<dyn ToastSink> {
        Rc::clone(&self.state.borrow().sink)
    }

    /// The layer used as the sink until another one is registered.
    ///
    /// The handle stays valid after a replacement but stops receiving frames.
    #[must_use]
    pub fn default_layer(&self) -> &ToastLayer {
        &self.default_layer
    }

    /// Restores the light theme, drops every patch, and reinstalls the
    /// default layer as sink.
    pub fn reset(&self) {
        *self.state.borrow_mut() = RegistryState::new(&self.default_layer);
        tracing::debug!("config registry reset");
    }
}

impl Default for ConfigRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ConfigRegistry")
            .field("mode", &state.mode)
            .field("overrides", &!state.overrides.is_empty())
            .finish_non_exhaustive()
    }
}
