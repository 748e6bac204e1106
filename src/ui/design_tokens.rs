// SPDX-License-Identifier: MPL-2.0
//! Layout scales shared by the built-in views.
//!
//! Colors and per-component dimensions live in the registry's
//! [`Theme`](crate::theme::Theme) so that applications can rebrand them;
//! the scales below are the fixed rhythm those components are laid out on.

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon glyph sizes
    pub const ICON_SM: f32 = 14.0;
    pub const ICON_MD: f32 = 18.0;

    // Toast layout
    pub const TOAST_MIN_WIDTH: f32 = 160.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Most UI text, labels, descriptions
    pub const BODY: f32 = 14.0;

    /// Caption - Badges, timestamps, small info
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::XL > spacing::MD);

    assert!(sizing::ICON_MD > sizing::ICON_SM);
    assert!(typography::BODY > typography::CAPTION);
    assert!(radius::MD > radius::SM);
    assert!(opacity::OVERLAY_MEDIUM > opacity::OVERLAY_SUBTLE);
};
