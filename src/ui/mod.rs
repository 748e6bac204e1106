// SPDX-License-Identifier: MPL-2.0
//! Iced views built on the design system.
//!
//! - [`design_tokens`] - Spacing, sizing and typography scales
//! - [`toast`] - Rendering of the toast layer

pub mod design_tokens;
pub mod toast;
