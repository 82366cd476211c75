//! Font slant and weight values
//!
//! [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// [§ 3.3 `font-style`](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
///
/// Only the two slants a host text renderer distinguishes.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    /// Upright glyphs.
    #[default]
    Normal,
    /// Italic glyphs.
    Italic,
}

/// A weight outside the nine CSS weight levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("font weight {0} is not one of 100, 200, ..., 900")]
pub struct InvalidFontWeight(pub u16);

/// [§ 3.2 `font-weight`](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
///
/// The nine numeric weight levels. `bold` is an alias for [`FontWeight::W700`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
pub enum FontWeight {
    /// Thin
    W100,
    /// Extra light
    W200,
    /// Light
    W300,
    /// Normal
    #[default]
    W400,
    /// Medium
    W500,
    /// Semi bold
    W600,
    /// Bold
    W700,
    /// Extra bold
    W800,
    /// Black
    W900,
}

impl FontWeight {
    /// "bold: Same as 700."
    pub const BOLD: Self = Self::W700;

    /// "normal: Same as 400."
    pub const NORMAL: Self = Self::W400;

    /// The numeric weight, 100 through 900.
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::W100 => 100,
            Self::W200 => 200,
            Self::W300 => 300,
            Self::W400 => 400,
            Self::W500 => 500,
            Self::W600 => 600,
            Self::W700 => 700,
            Self::W800 => 800,
            Self::W900 => 900,
        }
    }

    /// Map a numeric weight to its level; only exact multiples of 100 qualify.
    #[must_use]
    pub const fn from_value(value: u16) -> Option<Self> {
        match value {
            100 => Some(Self::W100),
            200 => Some(Self::W200),
            300 => Some(Self::W300),
            400 => Some(Self::W400),
            500 => Some(Self::W500),
            600 => Some(Self::W600),
            700 => Some(Self::W700),
            800 => Some(Self::W800),
            900 => Some(Self::W900),
            _ => None,
        }
    }

    /// Parse the value of an inline `font-weight` declaration.
    ///
    /// Accepts the literal `bold` or one of the strings `100` through `900`.
    /// Everything else, including `normal`, `bolder`, and `650`, is rejected.
    #[must_use]
    pub fn from_declaration_value(value: &str) -> Option<Self> {
        if value == "bold" {
            return Some(Self::BOLD);
        }
        // Exact digit strings only; "0700" or "+700" are not weight levels.
        if value.len() != 3 || !value.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        value.parse().ok().and_then(Self::from_value)
    }

    /// Whether this weight renders as bold (600 and above).
    #[must_use]
    pub fn is_bold(self) -> bool {
        self >= Self::W600
    }
}

impl From<FontWeight> for u16 {
    fn from(weight: FontWeight) -> Self {
        weight.value()
    }
}

impl TryFrom<u16> for FontWeight {
    type Error = InvalidFontWeight;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(InvalidFontWeight(value))
    }
}
