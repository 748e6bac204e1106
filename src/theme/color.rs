// SPDX-License-Identifier: MPL-2.0
//! Color token type.
//!
//! Colors are stored as 8-bit RGBA so that a token read from a configuration
//! file (`"#1890ff"`) compares exactly after a merge. Conversion to
//! [`iced::Color`] happens only at render time.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An sRGB color token with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Reasons a hex color token can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("color `{0}` must start with `#`")]
    MissingHash(String),
    #[error("color `{0}` must have 3, 4, 6 or 8 hex digits")]
    InvalidLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    InvalidDigit(String),
}

impl Color {
    pub const BLACK: Color = Color::rgb8(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb8(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba8(0x00, 0x00, 0x00, 0x00);

    /// Opaque color from 8-bit channels.
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Color from 8-bit channels including alpha.
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns this color with the alpha channel replaced.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Alpha as a `0.0..=1.0` fraction.
    #[must_use]
    pub fn alpha(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Relative luminance per WCAG 2.x, used to pick readable text colors.
    #[must_use]
    pub fn luminance(self) -> f32 {
        fn channel(value: u8) -> f32 {
            let c = f32::from(value) / 255.0;
            if c <= 0.039_28 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let Some(digits) = raw.strip_prefix('#') else {
            return Err(ColorParseError::MissingHash(raw.to_string()));
        };
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(raw.to_string()));
        }

        let nibble = |index: usize| -> u8 {
            // Digits were validated above; the fallback is unreachable.
            let value = u8::from_str_radix(&digits[index..=index], 16).unwrap_or(0);
            value * 17
        };
        let byte = |index: usize| -> u8 { u8::from_str_radix(&digits[index..index + 2], 16).unwrap_or(0) };

        match digits.len() {
            3 => Ok(Color::rgb8(nibble(0), nibble(1), nibble(2))),
            4 => Ok(Color::rgba8(nibble(0), nibble(1), nibble(2), nibble(3))),
            6 => Ok(Color::rgb8(byte(0), byte(2), byte(4))),
            8 => Ok(Color::rgba8(byte(0), byte(2), byte(4), byte(6))),
            _ => Err(ColorParseError::InvalidLength(raw.to_string())),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 0xff {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<Color> for iced::Color {
    fn from(color: Color) -> Self {
        iced::Color::from_rgba8(color.r, color.g, color.b, color.alpha())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn parses_six_digit_hex() {
        let color: Color = "#1890ff".parse().unwrap();
        assert_eq!(color, Color::rgb8(0x18, 0x90, 0xff));
    }

    #[test]
    fn parses_short_and_alpha_forms() {
        assert_eq!("#fff".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!(
            "#0008".parse::<Color>().unwrap(),
            Color::rgba8(0, 0, 0, 0x88)
        );
        assert_eq!(
            "#00000073".parse::<Color>().unwrap(),
            Color::rgba8(0, 0, 0, 0x73)
        );
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(matches!(
            "1890ff".parse::<Color>(),
            Err(ColorParseError::MissingHash(_))
        ));
        assert!(matches!(
            "#12345".parse::<Color>(),
            Err(ColorParseError::InvalidLength(_))
        ));
        assert!(matches!(
            "#zzzzzz".parse::<Color>(),
            Err(ColorParseError::InvalidDigit(_))
        ));
    }

    #[test]
    fn display_omits_opaque_alpha() {
        assert_eq!(Color::rgb8(0x18, 0x90, 0xff).to_string(), "#1890ff");
        assert_eq!(Color::rgba8(0, 0, 0, 0x73).to_string(), "#00000073");
    }

    #[test]
    fn converts_to_iced_color() {
        let color: iced::Color = Color::rgba8(255, 0, 0, 0x80).into();
        assert_abs_diff_eq!(color.r, 1.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(color.g, 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(color.a, 128.0 / 255.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn white_is_brighter_than_black() {
        assert!(Color::WHITE.luminance() > Color::BLACK.luminance());
        assert_abs_diff_eq!(Color::WHITE.luminance(), 1.0, epsilon = 1e-4);
    }
}
