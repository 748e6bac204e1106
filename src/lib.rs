// SPDX-License-Identifier: MPL-2.0
//! `glacier_ui` is the design-system core for Iced applications.
//!
//! It provides two services shared by every component:
//!
//! - [`registry::ConfigRegistry`] holds the typed [`theme::Theme`] tree.
//!   Partial [`theme::ThemePatch`]es deep-merge into it, and it owns the
//!   [`sink::ToastSink`] that toast output is mounted through.
//! - [`toast::ToastManager`] keeps the ordered, capacity-bounded list of
//!   active toasts and expires them on a cooperative clock.
//!
//! [`runtime::UiRuntime`] bundles both with the persisted
//! [`config::UiConfig`], and [`ui::toast`] renders the toast layer with Iced.

#![doc(html_root_url = "https://docs.rs/glacier_ui/0.1.0")]

pub mod config;
pub mod error;
pub mod registry;
pub mod runtime;
pub mod showcase;
pub mod sink;
pub mod theme;
pub mod toast;
pub mod ui;

#[cfg(test)]
mod test_utils;

pub use error::{Error, Result};
pub use registry::ConfigRegistry;
pub use runtime::UiRuntime;
