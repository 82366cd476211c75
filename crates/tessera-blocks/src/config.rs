//! Conversion settings supplied by the host.

use serde::{Deserialize, Serialize};
use tessera_style::{Color, DEFAULT_HEADING_SIZES, Style, TagStyles};

/// How the segmenter decides whether a subtree contains an image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageProbe {
    /// Look for the substring `<img` in the subtree's serialized markup.
    ///
    /// Misfires on attribute values that contain that text and on tag names
    /// such as `imgx`. Escaped text content never matches.
    #[default]
    Markup,
    /// Search the subtree for an `img` element.
    Structural,
}

/// What to do when a `data:image` source cannot be decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageErrorPolicy {
    /// Warn and leave that one image out of the sequence.
    #[default]
    Skip,
    /// Fail the whole conversion.
    Abort,
}

/// Settings for one conversion session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix joined to image sources that are neither remote nor data URLs.
    pub base_url: Option<String>,
    /// Color applied to `a` elements.
    pub hyperlink_color: Color,
    /// Font sizes for `h1` through `h6`.
    pub heading_sizes: [f32; 6],
    /// Root style for text outside any styled element.
    pub default_style: Style,
    /// Subtree image detection used by the segmenter.
    pub image_probe: ImageProbe,
    /// Handling of undecodable data URLs.
    pub on_image_error: ImageErrorPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(Color::LINK_BLUE, DEFAULT_HEADING_SIZES, Style::default())
    }
}

impl RenderConfig {
    /// A configuration with the required settings and no base URL.
    #[must_use]
    pub fn new(hyperlink_color: Color, heading_sizes: [f32; 6], default_style: Style) -> Self {
        Self {
            base_url: None,
            hyperlink_color,
            heading_sizes,
            default_style,
            image_probe: ImageProbe::default(),
            on_image_error: ImageErrorPolicy::default(),
        }
    }

    /// Set the prefix for relative image sources.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Choose the subtree image detection.
    #[must_use]
    pub fn with_image_probe(mut self, image_probe: ImageProbe) -> Self {
        self.image_probe = image_probe;
        self
    }

    /// Choose how undecodable data URLs are handled.
    #[must_use]
    pub fn with_image_error_policy(mut self, policy: ImageErrorPolicy) -> Self {
        self.on_image_error = policy;
        self
    }

    /// The tag table derived from these settings.
    #[must_use]
    pub const fn tag_styles(&self) -> TagStyles {
        TagStyles {
            hyperlink_color: self.hyperlink_color,
            heading_sizes: self.heading_sizes,
        }
    }
}
