// SPDX-License-Identifier: MPL-2.0
//! Base color palette the theme presets are built from.

use super::Color;

// Grayscale
pub const BLACK: Color = Color::BLACK;
pub const WHITE: Color = Color::WHITE;
pub const GRAY_900: Color = Color::rgb8(0x1a, 0x1a, 0x1a);
pub const GRAY_800: Color = Color::rgb8(0x26, 0x26, 0x26);
pub const GRAY_700: Color = Color::rgb8(0x4d, 0x4d, 0x4d);
pub const GRAY_400: Color = Color::rgb8(0x66, 0x66, 0x66);
pub const GRAY_300: Color = Color::rgb8(0xa6, 0xa6, 0xa6);
pub const GRAY_200: Color = Color::rgb8(0xbf, 0xbf, 0xbf);
pub const GRAY_100: Color = Color::rgb8(0xd9, 0xd9, 0xd9);
pub const GRAY_50: Color = Color::rgb8(0xf5, 0xf5, 0xf5);

// Brand colors (blue scale)
pub const PRIMARY_400: Color = Color::rgb8(0x66, 0xb3, 0xff);
pub const PRIMARY_500: Color = Color::rgb8(0x4d, 0x99, 0xe6);
pub const PRIMARY_600: Color = Color::rgb8(0x33, 0x80, 0xcc);
pub const PRIMARY_700: Color = Color::rgb8(0x26, 0x66, 0xb3);

// Semantic colors
pub const ERROR_500: Color = Color::rgb8(0xe5, 0x39, 0x35);
pub const ERROR_600: Color = Color::rgb8(0xc6, 0x28, 0x28);
pub const WARNING_500: Color = Color::rgb8(0xf1, 0xa6, 0x20);
pub const SUCCESS_500: Color = Color::rgb8(0x43, 0xb3, 0x67);
pub const INFO_500: Color = Color::rgb8(0x64, 0x96, 0xff);

// Overlays
pub const MASK: Color = Color::rgba8(0x00, 0x00, 0x00, 0x73);
pub const MASK_STRONG: Color = Color::rgba8(0x00, 0x00, 0x00, 0xb3);
