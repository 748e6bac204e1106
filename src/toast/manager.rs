// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `ToastManager` owns the active list, enforces the configured capacity
//! and expires toasts whose duration has elapsed. After every change it
//! mounts the new list through the registry's current sink.

use super::clock::{Clock, SystemClock};
use super::record::ToastRecord;
use super::request::{DismissReason, ToastId, ToastOptions, ToastRequest, ToastVariant};
use crate::config::ToastConfig;
use crate::registry::ConfigRegistry;
use crate::sink::{ToastFrame, TOAST_LAYER_ANCHOR};
use std::fmt;
use std::rc::Rc;

/// Messages for toast state changes, routed from the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Run a toast's action handler, then dismiss it.
    Action(ToastId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Owns the active toasts, oldest first.
pub struct ToastManager {
    registry: Rc<ConfigRegistry>,
    clock: Rc<dyn Clock>,
    config: ToastConfig,
    /// Active toasts in creation order (oldest first).
    active: Vec<ToastRecord>,
    next_sequence: u64,
}

impl ToastManager {
    /// Manager using wall-clock time.
    #[must_use]
    pub fn new(registry: Rc<ConfigRegistry>, config: ToastConfig) -> Self {
        Self::with_clock(registry, config, Rc::new(SystemClock))
    }

    #[must_use]
    pub fn with_clock(
        registry: Rc<ConfigRegistry>,
        config: ToastConfig,
        clock: Rc<dyn Clock>,
    ) -> Self {
        Self {
            registry,
            clock,
            config: config.resolved(),
            active: Vec::new(),
            next_sequence: 1,
        }
    }

    /// Shows a toast using the manager's configured defaults.
    pub fn show(&mut self, request: ToastRequest) -> ToastId {
        let defaults = self.config.clone();
        self.show_with(request, &defaults)
    }

    /// Shows a toast, resolving omitted fields against `defaults`.
    ///
    /// If the list is full, the oldest toasts are evicted first so that the
    /// active count never exceeds `defaults.max_count()`. A positive duration
    /// schedules an auto-dismiss; zero keeps the toast until dismissed.
    pub fn show_with(&mut self, request: ToastRequest, defaults: &ToastConfig) -> ToastId {
        let duration = request
            .options
            .duration
            .unwrap_or_else(|| defaults.default_duration());
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let evicted = self.evict_down_to(defaults.max_count().saturating_sub(1));
        let record = ToastRecord::new(sequence, request, duration, self.clock.now());
        let id = record.id().clone();
        tracing::debug!(
            id = %id,
            variant = ?record.variant(),
            duration_ms = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
            evicted = evicted.len(),
            "toast shown"
        );
        self.active.push(record);

        self.render();
        for record in &evicted {
            record.notify_closed(DismissReason::Evicted);
        }
        id
    }

    pub fn success(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Success, message, options)
    }

    pub fn info(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Info, message, options)
    }

    pub fn error(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Error, message, options)
    }

    pub fn warn(&mut self, message: impl Into<String>, options: ToastOptions) -> ToastId {
        self.show_variant(ToastVariant::Warn, message, options)
    }

    fn show_variant(
        &mut self,
        variant: ToastVariant,
        message: impl Into<String>,
        options: ToastOptions,
    ) -> ToastId {
        self.show(ToastRequest::new(variant, message).with_options(options))
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was active. Unknown or already dismissed
    /// IDs are a no-op. The toast's pending expiry goes away with it.
    pub fn dismiss(&mut self, id: &ToastId) -> bool {
        self.remove(id, DismissReason::Closed)
    }

    /// Runs the action handler of a toast, then dismisses it.
    ///
    /// Returns `false` if the toast is gone or has no action.
    pub fn trigger_action(&mut self, id: &ToastId) -> bool {
        let Some(handler) = self
            .get(id)
            .and_then(|record| record.action())
            .map(|action| action.handler.clone())
        else {
            return false;
        };
        handler.call(id);
        self.remove(id, DismissReason::Action);
        true
    }

    /// Dismisses every toast whose duration has elapsed.
    ///
    /// Should be called periodically (e.g., every 100ms) while
    /// [`has_pending_expiry`](Self::has_pending_expiry) is true. Returns the
    /// number of toasts removed.
    pub fn tick(&mut self) -> usize {
        let now = self.clock.now();
        let (expired, remaining): (Vec<_>, Vec<_>) = std::mem::take(&mut self.active)
            .into_iter()
            .partition(|record| record.is_due(now));
        self.active = remaining;
        tracing::trace!(expired = expired.len(), active = self.active.len(), "toast tick");

        if expired.is_empty() {
            return 0;
        }
        for record in &expired {
            tracing::debug!(id = %record.id(), "toast expired");
        }
        self.render();
        for record in &expired {
            record.notify_closed(DismissReason::Expired);
        }
        expired.len()
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id);
            }
            Message::Action(id) => {
                self.trigger_action(id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Dismisses every active toast.
    pub fn clear(&mut self) {
        if self.active.is_empty() {
            return;
        }
        let cleared = std::mem::take(&mut self.active);
        tracing::debug!(count = cleared.len(), "toasts cleared");
        self.render();
        for record in &cleared {
            record.notify_closed(DismissReason::Cleared);
        }
    }

    /// Replaces the configured defaults and applies the new capacity now.
    pub fn set_config(&mut self, config: ToastConfig) {
        self.config = config.resolved();
        let evicted = self.evict_down_to(self.config.max_count());
        if evicted.is_empty() {
            return;
        }
        self.render();
        for record in &evicted {
            record.notify_closed(DismissReason::Evicted);
        }
    }

    /// Drops every toast without running close handlers.
    ///
    /// IDs keep counting up, so an ID handed out before the reset never
    /// names a toast shown after it.
    pub fn reset(&mut self) {
        self.active.clear();
        self.render();
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Active toasts, oldest first.
    #[must_use]
    pub fn active(&self) -> &[ToastRecord] {
        &self.active
    }

    #[must_use]
    pub fn get(&self, id: &ToastId) -> Option<&ToastRecord> {
        self.active.iter().find(|record| record.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether any active toast is waiting to expire.
    #[must_use]
    pub fn has_pending_expiry(&self) -> bool {
        self.active.iter().any(|record| record.expires_at().is_some())
    }

    fn remove(&mut self, id: &ToastId, reason: DismissReason) -> bool {
        let Some(pos) = self.active.iter().position(|record| record.id() == id) else {
            return false;
        };
        let record = self.active.remove(pos);
        tracing::debug!(id = %id, ?reason, "toast dismissed");
        self.render();
        record.notify_closed(reason);
        true
    }

    /// Removes the oldest toasts until at most `limit` remain.
    fn evict_down_to(&mut self, limit: usize) -> Vec<ToastRecord> {
        if self.active.len() <= limit {
            return Vec::new();
        }
        let overflow = self.active.len() - limit;
        let evicted: Vec<ToastRecord> = self.active.drain(..overflow).collect();
        for record in &evicted {
            tracing::debug!(id = %record.id(), "toast evicted");
        }
        evicted
    }

    fn render(&self) {
        let sink = self.registry.render_function();
        sink.mount(
            &ToastFrame {
                toasts: &self.active,
                placement: self.config.placement(),
            },
            TOAST_LAYER_ANCHOR,
        );
    }
}

impl fmt::Debug for ToastManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastManager")
            .field("config", &self.config)
            .field("active", &self.active.len())
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}
