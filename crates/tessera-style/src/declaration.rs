//! Inline `style` attribute parsing.
//!
//! [CSS Style Attributes](https://www.w3.org/TR/css-style-attr/)
//!
//! This is not a CSS parser. The attribute is scanned for
//! `name: value` pairs separated by `;`, and only four properties with a
//! narrow set of values are understood. Anything else is skipped without
//! affecting the pairs around it.

use std::sync::LazyLock;

use regex::Regex;
use tessera_common::warning::warn_once;

use crate::{Color, FontStyle, FontWeight, TextDecoration, TextDecorationLine};

/// One `name: value` pair: the name runs up to the first colon, the value up
/// to the next semicolon (so values may themselves contain colons).
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^:;]+):([^;]*)").unwrap_or_else(|_| unreachable!("static pattern"))
});

/// A recognized style mutation from an inline `style` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// `color: #RRGGBB`
    Color(Color),
    /// `font-weight: bold | 100 ... 900`
    FontWeight(FontWeight),
    /// `font-style: italic`
    FontStyle(FontStyle),
    /// `text-decoration: <line>+`, merged into the existing decoration set.
    TextDecoration(TextDecoration),
}

/// Parse a raw `style` attribute into the declarations it recognizes,
/// in source order.
///
/// Unknown properties and unsupported values produce a warning and are
/// otherwise ignored.
#[must_use]
pub fn parse_declarations(style_attr: &str) -> Vec<Declaration> {
    DECLARATION
        .captures_iter(style_attr)
        .filter_map(|caps| {
            let name = caps.get(1)?.as_str().trim();
            let value = caps.get(2)?.as_str().trim();
            parse_declaration(name, value)
        })
        .collect()
}

/// Parse a single trimmed `name`/`value` pair.
#[must_use]
pub fn parse_declaration(name: &str, value: &str) -> Option<Declaration> {
    let parsed = match name {
        // [§ 3.1 'color'](https://www.w3.org/TR/css-color-4/#the-color-property)
        "color" => Color::from_rrggbb(value).map(Declaration::Color),
        // [§ 3.2 'font-weight'](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
        "font-weight" => FontWeight::from_declaration_value(value).map(Declaration::FontWeight),
        // [§ 3.3 'font-style'](https://www.w3.org/TR/css-fonts-4/#font-style-prop)
        // Only `italic` is honored; `normal` does not reset an inherited italic.
        "font-style" => match value.parse::<FontStyle>() {
            Ok(FontStyle::Italic) => Some(Declaration::FontStyle(FontStyle::Italic)),
            _ => None,
        },
        // [§ 2 'text-decoration'](https://www.w3.org/TR/css-text-decor-3/#text-decoration-property)
        "text-decoration" => parse_text_decoration(value).map(Declaration::TextDecoration),
        "" => return None,
        _ => {
            warn_once("style", &format!("ignoring unsupported property '{name}'"));
            return None;
        }
    };

    if parsed.is_none() {
        warn_once(
            "style",
            &format!("ignoring unsupported value '{value}' for {name}"),
        );
    }
    parsed
}

/// Whitespace-separated decoration lines; unknown tokens are dropped.
/// Returns `None` when no token is recognized.
fn parse_text_decoration(value: &str) -> Option<TextDecoration> {
    let lines: Vec<TextDecoration> = value
        .split_whitespace()
        .filter_map(|token| token.parse::<TextDecorationLine>().ok())
        .map(TextDecoration::from)
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(TextDecoration::combine(&lines))
    }
}
