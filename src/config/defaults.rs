// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Capacity, auto-dismiss duration and placement
//! - **Layering**: Overlay stacking order
//! - **Animation**: Transition timing passed to the view layer

use crate::sink::ToastPosition;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Maximum number of toasts visible at once.
pub const DEFAULT_TOAST_MAX_COUNT: usize = 5;

/// Smallest accepted capacity; lower values are clamped.
pub const MIN_TOAST_MAX_COUNT: usize = 1;

/// Auto-dismiss duration when a request does not set one (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Corner the toast stack is pinned to.
pub const DEFAULT_TOAST_POSITION: ToastPosition = ToastPosition::TopRight;

/// Distance between the toast stack and the window edge (in logical pixels).
pub const DEFAULT_TOAST_OFFSET: f32 = 24.0;

/// Interval at which the application should call `ToastManager::tick`
/// while toasts are pending (in milliseconds).
pub const TOAST_TICK_INTERVAL_MS: u64 = 100;

// ==========================================================================
// Layering Defaults
// ==========================================================================

/// Stacking order for overlays (modals, toasts, dropdowns).
pub const DEFAULT_Z_INDEX: u32 = 1000;

// ==========================================================================
// Animation Defaults
// ==========================================================================

/// Whether enter/leave transitions are enabled.
pub const DEFAULT_ANIMATION_ENABLED: bool = true;

/// Enter/leave transition duration (in milliseconds).
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 200;
