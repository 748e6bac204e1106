// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Color channels and theme dimensions are `f32`; compare them with these
//! instead of `assert_eq!` when a value went through arithmetic.

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
pub const F32_EPSILON: f32 = 1e-6;
