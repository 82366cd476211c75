//! Tag-implied style adjustments.
//!
//! A small fixed user-agent table: links, headings, and the phrasing elements
//! that change weight, slant, or decoration. There are no selectors and no
//! stylesheets; a child style is its parent style with the element's tag
//! adjustments and then its inline declarations applied on top.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

use crate::{Color, FontStyle, FontWeight, Style, TextDecoration};

/// Font sizes commonly used for `h1` through `h6`.
pub const DEFAULT_HEADING_SIZES: [f32; 6] = [32.0, 24.0, 18.72, 16.0, 13.28, 10.72];

/// Elements with a built-in style adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StyledTag {
    /// Hyperlink: underline plus the configured link color.
    A,
    /// Heading level 1.
    H1,
    /// Heading level 2.
    H2,
    /// Heading level 3.
    H3,
    /// Heading level 4.
    H4,
    /// Heading level 5.
    H5,
    /// Heading level 6.
    H6,
    /// Bold.
    B,
    /// Bold.
    Strong,
    /// Italic.
    I,
    /// Italic.
    Em,
    /// Underline.
    U,
}

impl StyledTag {
    /// Look up a tag name; unknown tags have no adjustment.
    #[must_use]
    pub fn from_tag_name(tag: &str) -> Option<Self> {
        Self::from_str(tag).ok()
    }

    /// Index into the heading size table, for `h1` through `h6`.
    #[must_use]
    pub const fn heading_level(self) -> Option<usize> {
        match self {
            Self::H1 => Some(0),
            Self::H2 => Some(1),
            Self::H3 => Some(2),
            Self::H4 => Some(3),
            Self::H5 => Some(4),
            Self::H6 => Some(5),
            _ => None,
        }
    }
}

/// The configurable parts of the tag table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagStyles {
    /// Color applied to `a` elements.
    pub hyperlink_color: Color,
    /// Font sizes for `h1` through `h6`.
    pub heading_sizes: [f32; 6],
}

impl Default for TagStyles {
    fn default() -> Self {
        Self {
            hyperlink_color: Color::LINK_BLUE,
            heading_sizes: DEFAULT_HEADING_SIZES,
        }
    }
}

impl TagStyles {
    /// Apply the built-in adjustments for `tag` over `parent`.
    ///
    /// Tags without an adjustment, and a missing tag, return `parent` as is.
    #[must_use]
    pub fn cascade(&self, parent: &Style, tag: Option<&str>) -> Style {
        let Some(tag) = tag.and_then(StyledTag::from_tag_name) else {
            return *parent;
        };

        match tag {
            StyledTag::A => parent
                .with_added_decoration(TextDecoration::UNDERLINE)
                .with_color(self.hyperlink_color),
            StyledTag::B | StyledTag::Strong => parent.with_font_weight(FontWeight::BOLD),
            StyledTag::I | StyledTag::Em => parent.with_font_style(FontStyle::Italic),
            StyledTag::U => parent.with_added_decoration(TextDecoration::UNDERLINE),
            heading => heading
                .heading_level()
                .map_or(*parent, |level| parent.with_font_size(self.heading_sizes[level])),
        }
    }

    /// Full style resolution for an element: tag adjustments first, then the
    /// element's inline `style` attribute, if any.
    #[must_use]
    pub fn resolve(&self, parent: &Style, tag: Option<&str>, style_attr: Option<&str>) -> Style {
        let style = self.cascade(parent, tag);
        match style_attr {
            Some(attr) => style.apply_style_attribute(attr),
            None => style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup_is_case_insensitive() {
        assert_eq!(StyledTag::from_tag_name("STRONG"), Some(StyledTag::Strong));
        assert_eq!(StyledTag::from_tag_name("h3"), Some(StyledTag::H3));
        assert_eq!(StyledTag::from_tag_name("span"), None);
        assert_eq!(StyledTag::from_tag_name("h7"), None);
    }

    #[test]
    fn test_heading_levels() {
        let tags = TagStyles::default();
        let parent = Style::default();
        for (i, name) in ["h1", "h2", "h3", "h4", "h5", "h6"].iter().enumerate() {
            let style = tags.cascade(&parent, Some(name));
            assert_eq!(style, parent.with_font_size(DEFAULT_HEADING_SIZES[i]));
        }
    }
}
