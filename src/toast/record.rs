// SPDX-License-Identifier: MPL-2.0
//! Materialized toast held in the active list.

use super::clock::ScheduledDismiss;
use super::request::{DismissReason, ToastAction, ToastId, ToastRequest, ToastVariant};
use std::time::{Duration, Instant};

/// A toast that has been shown and not yet removed.
///
/// Records are never edited after creation; they only leave the list.
#[derive(Debug, Clone)]
pub struct ToastRecord {
    id: ToastId,
    sequence: u64,
    request: ToastRequest,
    /// Resolved duration after applying the configured default.
    duration: Duration,
    created_at: Instant,
    schedule: Option<ScheduledDismiss>,
}

impl ToastRecord {
    pub(crate) fn new(
        sequence: u64,
        request: ToastRequest,
        duration: Duration,
        created_at: Instant,
    ) -> Self {
        Self {
            id: ToastId::from_sequence(sequence),
            sequence,
            request,
            duration,
            created_at,
            schedule: ScheduledDismiss::after(created_at, duration),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ToastId {
        &self.id
    }

    /// Creation order; strictly increasing within a manager.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    #[must_use]
    pub fn variant(&self) -> ToastVariant {
        self.request.variant
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.request.message
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.request.options.action.as_ref()
    }

    #[must_use]
    pub fn closable(&self) -> bool {
        self.request.options.closable
    }

    /// Custom icon if one was requested, otherwise the variant glyph.
    #[must_use]
    pub fn icon(&self) -> &str {
        self.request
            .options
            .icon
            .as_deref()
            .unwrap_or_else(|| self.request.variant.default_icon())
    }

    /// Zero means the toast stays until dismissed.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// When the toast will expire, if it auto-dismisses.
    #[must_use]
    pub fn expires_at(&self) -> Option<Instant> {
        self.schedule.map(ScheduledDismiss::deadline)
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.schedule.is_some_and(|schedule| schedule.is_due(now))
    }

    pub(crate) fn notify_closed(&self, reason: DismissReason) {
        if let Some(handler) = &self.request.options.on_close {
            handler.call(&self.id, reason);
        }
    }
}
