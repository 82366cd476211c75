//! The five-property text style.

use serde::{Deserialize, Serialize};

use crate::declaration::{Declaration, parse_declarations};
use crate::{Color, FontStyle, FontWeight, TextDecoration};

/// Default font size in logical pixels.
pub const DEFAULT_FONT_SIZE: f32 = 16.0;

/// An immutable text style.
///
/// Two styles are equal iff all five fields are equal. Every transformation
/// returns a new value and leaves `self` untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Style {
    /// [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
    pub color: Color,
    /// [§ 2.1 'text-decoration-line'](https://www.w3.org/TR/css-text-decor-3/#text-decoration-line-property)
    pub decoration: TextDecoration,
    /// [§ 3.5 'font-size'](https://www.w3.org/TR/css-fonts-4/#font-size-prop), in logical pixels
    pub font_size: f32,
    /// [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
    pub font_style: FontStyle,
    /// [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    pub font_weight: FontWeight,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            decoration: TextDecoration::NONE,
            font_size: DEFAULT_FONT_SIZE,
            font_style: FontStyle::Normal,
            font_weight: FontWeight::NORMAL,
        }
    }
}

impl Style {
    /// Copy with a different color.
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Copy with `decoration` merged into the current decoration set.
    #[must_use]
    pub const fn with_added_decoration(self, decoration: TextDecoration) -> Self {
        Self {
            decoration: self.decoration.union(decoration),
            ..self
        }
    }

    /// Copy with a different font size.
    #[must_use]
    pub const fn with_font_size(self, font_size: f32) -> Self {
        Self { font_size, ..self }
    }

    /// Copy with a different slant.
    #[must_use]
    pub const fn with_font_style(self, font_style: FontStyle) -> Self {
        Self { font_style, ..self }
    }

    /// Copy with a different weight.
    #[must_use]
    pub const fn with_font_weight(self, font_weight: FontWeight) -> Self {
        Self {
            font_weight,
            ..self
        }
    }

    /// Apply one recognized declaration.
    #[must_use]
    pub const fn apply(self, declaration: &Declaration) -> Self {
        match *declaration {
            Declaration::Color(color) => self.with_color(color),
            Declaration::FontWeight(weight) => self.with_font_weight(weight),
            Declaration::FontStyle(style) => self.with_font_style(style),
            Declaration::TextDecoration(decoration) => self.with_added_decoration(decoration),
        }
    }

    /// Apply declarations in order; later ones win for the same property,
    /// except decorations, which accumulate.
    #[must_use]
    pub fn apply_declarations(self, declarations: &[Declaration]) -> Self {
        declarations.iter().fold(self, |style, decl| style.apply(decl))
    }

    /// Parse a raw `style` attribute and apply what it recognizes.
    #[must_use]
    pub fn apply_style_attribute(self, style_attr: &str) -> Self {
        self.apply_declarations(&parse_declarations(style_attr))
    }
}
