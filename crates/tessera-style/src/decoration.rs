//! Text decoration lines
//!
//! [CSS Text Decoration Module Level 3](https://www.w3.org/TR/css-text-decor-3/)

use std::fmt;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// [§ 2.1 `text-decoration-line`](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
///
/// "Specifies what line decorations, if any, are added to the element."
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum TextDecorationLine {
    /// "Each line of text is underlined."
    Underline,
    /// "Each line of text has a line through the middle."
    LineThrough,
    /// "Each line of text has a line over it."
    Overline,
}

impl TextDecorationLine {
    const fn bit(self) -> u8 {
        match self {
            Self::Underline => 0b001,
            Self::LineThrough => 0b010,
            Self::Overline => 0b100,
        }
    }
}

/// A set of decoration lines. Combining two sets is a union.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<TextDecorationLine>", into = "Vec<TextDecorationLine>")]
pub struct TextDecoration {
    bits: u8,
}

impl TextDecoration {
    /// No decoration.
    pub const NONE: Self = Self { bits: 0 };
    /// Underline only.
    pub const UNDERLINE: Self = Self::line(TextDecorationLine::Underline);
    /// Line-through only.
    pub const LINE_THROUGH: Self = Self::line(TextDecorationLine::LineThrough);
    /// Overline only.
    pub const OVERLINE: Self = Self::line(TextDecorationLine::Overline);

    /// A set holding a single line.
    #[must_use]
    pub const fn line(line: TextDecorationLine) -> Self {
        Self { bits: line.bit() }
    }

    /// Union of every decoration in `decorations`.
    #[must_use]
    pub fn combine(decorations: &[Self]) -> Self {
        decorations.iter().fold(Self::NONE, |acc, d| acc.union(*d))
    }

    /// Both sets' lines.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Whether every line of `other` is also in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.bits & other.bits == other.bits
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// The lines in the set, in declaration order of [`TextDecorationLine`].
    pub fn lines(self) -> impl Iterator<Item = TextDecorationLine> {
        TextDecorationLine::iter().filter(move |line| self.contains(Self::line(*line)))
    }
}

impl From<TextDecorationLine> for TextDecoration {
    fn from(line: TextDecorationLine) -> Self {
        Self::line(line)
    }
}

impl From<Vec<TextDecorationLine>> for TextDecoration {
    fn from(lines: Vec<TextDecorationLine>) -> Self {
        lines.into_iter().map(Self::from).fold(Self::NONE, Self::union)
    }
}

impl From<TextDecoration> for Vec<TextDecorationLine> {
    fn from(decoration: TextDecoration) -> Self {
        decoration.lines().collect()
    }
}

impl fmt::Display for TextDecoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return f.write_str("none");
        }
        let names: Vec<String> = self.lines().map(|line| line.to_string()).collect();
        f.write_str(&names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_is_union() {
        let both = TextDecoration::combine(&[
            TextDecoration::UNDERLINE,
            TextDecoration::OVERLINE,
            TextDecoration::UNDERLINE,
        ]);
        assert!(both.contains(TextDecoration::UNDERLINE));
        assert!(both.contains(TextDecoration::OVERLINE));
        assert!(!both.contains(TextDecoration::LINE_THROUGH));
        assert_eq!(both.to_string(), "underline overline");
    }

    #[test]
    fn test_line_names() {
        assert_eq!(
            "line-through".parse::<TextDecorationLine>(),
            Ok(TextDecorationLine::LineThrough)
        );
        assert!("blink".parse::<TextDecorationLine>().is_err());
        assert_eq!(TextDecoration::NONE.to_string(), "none");
    }
}
