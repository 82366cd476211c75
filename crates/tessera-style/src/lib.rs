//! Text styles for tessera.
//!
//! # Scope
//!
//! This crate implements:
//! - **Style Model** - an immutable five-property [`Style`] (color, decoration
//!   set, font size, font style, font weight)
//! - **Tag Cascade** - [`TagStyles::cascade`], the built-in adjustments for
//!   `a`, `h1`-`h6`, `b`/`strong`, `i`/`em`, and `u`
//! - **Inline Declarations** - [`parse_declarations`], the `style` attribute
//!   mini-syntax limited to `color`, `font-weight`, `font-style`, and
//!   `text-decoration`
//!
//! # Not Implemented
//!
//! - Selectors, stylesheets, and specificity
//! - Lengths, named colors, and color functions

/// Tag-implied style adjustments.
pub mod cascade;
mod color;
/// Inline `style` attribute parsing.
pub mod declaration;
mod decoration;
mod font;
mod style;

pub use cascade::{DEFAULT_HEADING_SIZES, StyledTag, TagStyles};
pub use color::{Color, ColorParseError};
pub use declaration::{Declaration, parse_declarations};
pub use decoration::{TextDecoration, TextDecorationLine};
pub use font::{FontStyle, FontWeight, InvalidFontWeight};
pub use style::{DEFAULT_FONT_SIZE, Style};
