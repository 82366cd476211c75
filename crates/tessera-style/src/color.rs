//! Text color values
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A color string that is not valid hex notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid hex color '{0}': expected #rgb, #rgba, #rrggbb, or #rrggbbaa")]
pub struct ColorParseError(pub String);

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
///
/// Serialized as hex notation so configuration files can say `"#0000ee"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl Color {
    /// Black (#000000)
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// The conventional unvisited link blue (#0000ee)
    pub const LINK_BLUE: Self = Self::rgb(0, 0, 0xee);

    /// An opaque color from its three channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse the strict `#RRGGBB` form accepted by inline `color` declarations.
    ///
    /// Exactly a `#` followed by six hex digits; alpha is forced to opaque.
    /// Shorthand, alpha, and named forms are rejected.
    #[must_use]
    pub fn from_rrggbb(value: &str) -> Option<Self> {
        let hex = value.strip_prefix('#')?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Self::from_hex(hex)
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a <hex-color> is a <hash-token> token whose value consists of
    /// 3, 4, 6, or 8 hexadecimal digits."
    ///
    /// The leading `#` is optional.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        // "The three-digit RGB notation (#RGB) is converted into six-digit form (#RRGGBB)
        // by replicating digits, not by adding zeros."
        let short = |i: usize| u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok();

        match hex.len() {
            3 => Some(Self::rgb(short(0)?, short(1)?, short(2)?)),
            4 => Some(Self {
                r: short(0)?,
                g: short(1)?,
                b: short(2)?,
                a: short(3)?,
            }),
            6 => Some(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Some(Self {
                r: channel(0..2)?,
                g: channel(2..4)?,
                b: channel(4..6)?,
                a: channel(6..8)?,
            }),
            _ => None,
        }
    }

    /// Convert to hex string notation (#rrggbb or #rrggbbaa if alpha != 255)
    #[must_use]
    pub fn to_hex_string(&self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl std::str::FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s.trim()).ok_or_else(|| ColorParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rrggbb_strict() {
        assert_eq!(Color::from_rrggbb("#112233"), Some(Color::rgb(0x11, 0x22, 0x33)));
        assert_eq!(Color::from_rrggbb("#AbCdEf"), Some(Color::rgb(0xab, 0xcd, 0xef)));
        assert_eq!(Color::from_rrggbb("112233"), None);
        assert_eq!(Color::from_rrggbb("#123"), None);
        assert_eq!(Color::from_rrggbb("#11223344"), None);
        assert_eq!(Color::from_rrggbb("#11223g"), None);
        assert_eq!(Color::from_rrggbb("#+11223"), None);
    }

    #[test]
    fn test_from_hex_forms() {
        assert_eq!(Color::from_hex("#f00"), Some(Color::rgb(255, 0, 0)));
        assert_eq!(
            Color::from_hex("00ff0080"),
            Some(Color {
                r: 0,
                g: 255,
                b: 0,
                a: 0x80
            })
        );
        assert_eq!(Color::from_hex("#ééé"), None);
    }

    #[test]
    fn test_hex_string_roundtrip() {
        let color: Color = "#0000EE".parse().unwrap();
        assert_eq!(color, Color::LINK_BLUE);
        assert_eq!(color.to_string(), "#0000ee");
        assert!("blue".parse::<Color>().is_err());
    }
}
