// SPDX-License-Identifier: MPL-2.0
//! Caller-facing toast types: variants, identities, options and callbacks.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

/// Opaque toast identity, unique within one [`ToastManager`](super::ToastManager).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub(crate) fn from_sequence(seq: u64) -> Self {
        Self(format!("toast-{seq}"))
    }

    /// The identity as a string, e.g. for a DOM-style anchor or a log field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rebuilds an identity received as text, e.g. from a persisted action.
impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Visual and semantic flavor of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastVariant {
    #[default]
    Success,
    Info,
    Error,
    Warn,
}

impl ToastVariant {
    /// Glyph shown when the request carries no custom icon.
    #[must_use]
    pub fn default_icon(self) -> &'static str {
        match self {
            ToastVariant::Success => "✓",
            ToastVariant::Info => "i",
            ToastVariant::Error => "✕",
            ToastVariant::Warn => "!",
        }
    }
}

/// Why a toast left the active list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// Its duration elapsed.
    Expired,
    /// `dismiss` was called, by code or by the close button.
    Closed,
    /// Its action button was pressed.
    Action,
    /// It was the oldest toast when a new one exceeded the capacity.
    Evicted,
    /// `clear` removed every toast.
    Cleared,
}

/// Handler run when the action button of a toast is pressed.
#[derive(Clone)]
pub struct ActionHandler(Rc<dyn Fn(&ToastId)>);

impl ActionHandler {
    pub fn new(handler: impl Fn(&ToastId) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub(crate) fn call(&self, id: &ToastId) {
        (self.0)(id);
    }
}

impl fmt::Debug for ActionHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionHandler(..)")
    }
}

/// Handler run once when a toast is removed, whatever the reason.
#[derive(Clone)]
pub struct CloseHandler(Rc<dyn Fn(&ToastId, DismissReason)>);

impl CloseHandler {
    pub fn new(handler: impl Fn(&ToastId, DismissReason) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub(crate) fn call(&self, id: &ToastId, reason: DismissReason) {
        (self.0)(id, reason);
    }
}

impl fmt::Debug for CloseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseHandler(..)")
    }
}

/// Labelled action button attached to a toast.
#[derive(Debug, Clone)]
pub struct ToastAction {
    pub text: String,
    pub handler: ActionHandler,
}

/// Everything about a toast except its variant and message.
///
/// Fields left at their default fall back to the manager's
/// [`ToastConfig`](crate::config::ToastConfig).
#[derive(Debug, Clone)]
pub struct ToastOptions {
    pub action: Option<ToastAction>,
    pub on_close: Option<CloseHandler>,
    pub closable: bool,
    /// `None` uses the configured default; `Some(Duration::ZERO)` never expires.
    pub duration: Option<Duration>,
    /// Glyph replacing the variant icon.
    pub icon: Option<String>,
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self {
            action: None,
            on_close: None,
            closable: true,
            duration: None,
            icon: None,
        }
    }
}

impl ToastOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an action button.
    #[must_use]
    pub fn action(mut self, text: impl Into<String>, handler: impl Fn(&ToastId) + 'static) -> Self {
        self.action = Some(ToastAction {
            text: text.into(),
            handler: ActionHandler::new(handler),
        });
        self
    }

    /// Sets the removal callback.
    #[must_use]
    pub fn on_close(mut self, handler: impl Fn(&ToastId, DismissReason) + 'static) -> Self {
        self.on_close = Some(CloseHandler::new(handler));
        self
    }

    #[must_use]
    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }

    /// Overrides the configured auto-dismiss duration.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration(Duration::ZERO)
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// A request to show one toast.
#[derive(Debug, Clone)]
pub struct ToastRequest {
    pub variant: ToastVariant,
    pub message: String,
    pub options: ToastOptions,
}

impl ToastRequest {
    pub fn new(variant: ToastVariant, message: impl Into<String>) -> Self {
        Self {
            variant,
            message: message.into(),
            options: ToastOptions::default(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Success, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Info, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Error, message)
    }

    pub fn warn(message: impl Into<String>) -> Self {
        Self::new(ToastVariant::Warn, message)
    }

    #[must_use]
    pub fn with_options(mut self, options: ToastOptions) -> Self {
        self.options = options;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn ids_render_with_prefix() {
        assert_eq!(ToastId::from_sequence(7).as_str(), "toast-7");
        assert_eq!(ToastId::from_sequence(7).to_string(), "toast-7");
    }

    #[test]
    fn options_default_to_closable_without_duration() {
        let options = ToastOptions::default();
        assert!(options.closable);
        assert!(options.duration.is_none());
        assert!(options.action.is_none());
    }

    #[test]
    fn persistent_sets_zero_duration() {
        assert_eq!(ToastOptions::new().persistent().duration, Some(Duration::ZERO));
    }

    #[test]
    fn constructors_set_variant() {
        assert_eq!(ToastRequest::success("").variant, ToastVariant::Success);
        assert_eq!(ToastRequest::info("").variant, ToastVariant::Info);
        assert_eq!(ToastRequest::error("").variant, ToastVariant::Error);
        assert_eq!(ToastRequest::warn("").variant, ToastVariant::Warn);
    }

    #[test]
    fn action_handler_receives_id() {
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);
        let options = ToastOptions::new().action("Undo", move |id| {
            flag.set(id.as_str() == "toast-1");
        });

        let action = options.action.expect("action set");
        assert_eq!(action.text, "Undo");
        action.handler.call(&ToastId::from_sequence(1));
        assert!(seen.get());
    }

    #[test]
    fn variant_icons_are_distinct() {
        let icons = [
            ToastVariant::Success.default_icon(),
            ToastVariant::Info.default_icon(),
            ToastVariant::Error.default_icon(),
            ToastVariant::Warn.default_icon(),
        ];
        for (i, a) in icons.iter().enumerate() {
            for b in &icons[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
