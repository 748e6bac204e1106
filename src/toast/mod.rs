// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Toasts appear temporarily to inform users about actions (save success,
//! errors, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`request`] - `ToastRequest`, `ToastOptions` and the variant/identity types
//! - [`record`] - `ToastRecord`, a shown toast with its pending expiry
//! - [`clock`] - Time sources; `ManualClock` drives virtual time in tests
//! - [`manager`] - `ToastManager` for ordering, capacity and expiry
//!
//! # Usage
//!
//! ```
//! use glacier_ui::config::ToastConfig;
//! use glacier_ui::registry::ConfigRegistry;
//! use glacier_ui::toast::{ToastManager, ToastOptions};
//! use std::rc::Rc;
//!
//! let registry = Rc::new(ConfigRegistry::new());
//! let mut toasts = ToastManager::new(Rc::clone(&registry), ToastConfig::default());
//!
//! let id = toasts.success("Saved", ToastOptions::new());
//! assert_eq!(registry.default_layer().len(), 1);
//!
//! toasts.dismiss(&id);
//! assert!(registry.default_layer().is_empty());
//! ```
//!
//! # Ordering
//!
//! The active list is kept oldest first. When a new toast would exceed the
//! capacity, the oldest toast is evicted before the new one is appended.

pub mod clock;
pub mod manager;
pub mod record;
pub mod request;

pub use clock::{Clock, ManualClock, ScheduledDismiss, SystemClock};
pub use manager::{Message as ToastMessage, ToastManager};
pub use record::ToastRecord;
pub use request::{
    ActionHandler, CloseHandler, DismissReason, ToastAction, ToastId, ToastOptions, ToastRequest,
    ToastVariant,
};
