// SPDX-License-Identifier: MPL-2.0
//! Mount indirection for the toast layer.
//!
//! The toast manager does not know how toasts are drawn. After every change
//! to the active list it hands a [`ToastFrame`] to the sink currently held by
//! the [`ConfigRegistry`](crate::registry::ConfigRegistry). Under Iced,
//! "mounting" means publishing the frame into a [`ToastLayer`] that the
//! application's `view` reads on the next redraw.

use crate::toast::ToastRecord;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Stable id of the container the toast layer is mounted into.
pub const TOAST_LAYER_ANCHOR: &str = "glacier-toast-layer";

/// Screen corner or edge the toast stack is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    TopLeft,
    Top,
    #[default]
    TopRight,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl ToastPosition {
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(
            self,
            ToastPosition::TopLeft | ToastPosition::Top | ToastPosition::TopRight
        )
    }
}

/// Where the layer is placed on screen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ToastPlacement {
    pub position: ToastPosition,
    /// Distance from the pinned edge, in logical pixels.
    pub offset: f32,
}

/// One redraw of the toast layer: the full active list, oldest first.
#[derive(Debug, Clone, Copy)]
pub struct ToastFrame<'a> {
    pub toasts: &'a [ToastRecord],
    pub placement: ToastPlacement,
}

/// Receives every redraw of the toast layer.
pub trait ToastSink {
    fn mount(&self, frame: &ToastFrame<'_>, anchor: &str);
}

impl<F> ToastSink for F
where
    F: Fn(&ToastFrame<'_>, &str),
{
    fn mount(&self, frame: &ToastFrame<'_>, anchor: &str) {
        self(frame, anchor);
    }
}

/// Sink that drops every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl ToastSink for NoopSink {
    fn mount(&self, _frame: &ToastFrame<'_>, _anchor: &str) {}
}

#[derive(Debug, Default)]
struct LayerState {
    toasts: Vec<ToastRecord>,
    placement: ToastPlacement,
    anchor: Option<String>,
    mounts: u64,
}

/// Shared snapshot of the last mounted frame.
///
/// Clones are handles to the same layer. The registry's default sink is a
/// `ToastLayer`, and the Iced view renders from another handle to it.
#[derive(Clone, Default)]
pub struct ToastLayer {
    state: Rc<RefCell<LayerState>>,
}

impl ToastLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the mounted toasts, oldest first.
    #[must_use]
    pub fn toasts(&self) -> Vec<ToastRecord> {
        self.state.borrow().toasts.clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn placement(&self) -> ToastPlacement {
        self.state.borrow().placement
    }

    /// Container the last frame was mounted into; `None` before the first mount.
    #[must_use]
    pub fn anchor(&self) -> Option<String> {
        self.state.borrow().anchor.clone()
    }

    /// Number of frames mounted so far.
    #[must_use]
    pub fn mount_count(&self) -> u64 {
        self.state.borrow().mounts
    }
}

impl fmt::Debug for ToastLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("ToastLayer")
            .field("toasts", &state.toasts.len())
            .field("mounts", &state.mounts)
            .finish()
    }
}

impl ToastSink for ToastLayer {
    fn mount(&self, frame: &ToastFrame<'_>, anchor: &str) {
        let mut state = self.state.borrow_mut();
        state.toasts = frame.toasts.to_vec();
        state.placement = frame.placement;
        if state.anchor.as_deref() != Some(anchor) {
            state.anchor = Some(anchor.to_string());
        }
        state.mounts += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::ToastRequest;
    use std::cell::Cell;
    use std::time::{Duration, Instant};

    fn record(seq: u64) -> ToastRecord {
        ToastRecord::new(
            seq,
            ToastRequest::info(format!("toast {seq}")),
            Duration::ZERO,
            Instant::now(),
        )
    }

    #[test]
    fn layer_keeps_latest_frame() {
        let layer = ToastLayer::new();
        let handle = layer.clone();
        let records = vec![record(1), record(2)];

        layer.mount(
            &ToastFrame {
                toasts: &records,
                placement: ToastPlacement {
                    position: ToastPosition::BottomRight,
                    offset: 16.0,
                },
            },
            TOAST_LAYER_ANCHOR,
        );

        assert_eq!(handle.len(), 2);
        assert_eq!(handle.placement().position, ToastPosition::BottomRight);
        assert_eq!(handle.anchor().as_deref(), Some(TOAST_LAYER_ANCHOR));
        assert_eq!(handle.mount_count(), 1);

        layer.mount(
            &ToastFrame {
                toasts: &records[1..],
                placement: ToastPlacement::default(),
            },
            TOAST_LAYER_ANCHOR,
        );
        assert_eq!(handle.toasts()[0].message(), "toast 2");
        assert_eq!(handle.mount_count(), 2);
    }

    #[test]
    fn closures_are_sinks() {
        let seen = Rc::new(Cell::new(0usize));
        let counter = Rc::clone(&seen);
        let sink = move |frame: &ToastFrame<'_>, _anchor: &str| counter.set(frame.toasts.len());

        let records = vec![record(1)];
        sink.mount(
            &ToastFrame {
                toasts: &records,
                placement: ToastPlacement::default(),
            },
            TOAST_LAYER_ANCHOR,
        );
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn position_parses_kebab_case() {
        #[derive(Deserialize)]
        struct Wrapper {
            position: ToastPosition,
        }
        let parsed: Wrapper = toml::from_str("position = \"bottom-left\"").unwrap();
        assert_eq!(parsed.position, ToastPosition::BottomLeft);
        assert!(!parsed.position.is_top());
    }
}
