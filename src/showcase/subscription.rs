// SPDX-License-Identifier: MPL-2.0
//! Timer subscription for toast expiry.

use super::Message;
use crate::config::TOAST_TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates a periodic tick subscription while any toast is waiting to expire.
///
/// Idle windows (no toasts, or only persistent ones) do not wake up.
pub fn create_tick_subscription(has_pending_expiry: bool) -> Subscription<Message> {
    if has_pending_expiry {
        time::every(Duration::from_millis(TOAST_TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
