//! The renderable output: image blocks and styled text trees.

use base64::Engine;
use serde::{Serialize, Serializer};
use tessera_style::Style;

/// One unit of the output sequence.
///
/// Consumers match on the variant; there is no shared behavior beyond order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderBlock {
    /// An image, loaded by the host.
    Image(ImageBlock),
    /// A styled text tree, laid out by the host.
    StyledText(TextSpan),
}

impl RenderBlock {
    /// The text tree, if this is a text block.
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextSpan> {
        match self {
            Self::StyledText(span) => Some(span),
            Self::Image(_) => None,
        }
    }

    /// The image, if this is an image block.
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageBlock> {
        match self {
            Self::Image(image) => Some(image),
            Self::StyledText(_) => None,
        }
    }
}

/// An `img` element resolved to something loadable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    /// The `src` attribute as written in the document.
    pub src: String,
    /// Where the image bytes come from.
    pub source: ImageSource,
}

/// Where an image's bytes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    /// Fetched and cached by the host. Remote sources are used verbatim;
    /// relative ones have the base URL prepended.
    Network {
        /// Absolute URL to fetch.
        url: String,
    },
    /// Already decoded from a `data:` URL.
    Memory {
        /// Raw image file bytes (PNG, JPEG, ...), not pixels.
        #[serde(serialize_with = "serialize_base64")]
        bytes: Vec<u8>,
    },
}

fn serialize_base64<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// A node of a styled text tree.
///
/// A span is never empty: it has non-empty `text`, at least one child, or
/// both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextSpan {
    /// Resolved style for this span's text; children carry their own.
    pub style: Style,
    /// Text shown before the children.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Nested spans, in document order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TextSpan>,
    /// URL to open when this span is activated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activation: Option<String>,
}

impl TextSpan {
    /// A leaf span holding only text.
    #[must_use]
    pub fn leaf(style: Style, text: impl Into<String>) -> Self {
        Self {
            style,
            text: text.into(),
            children: Vec::new(),
            activation: None,
        }
    }

    /// Own text followed by every descendant's text, depth-first.
    #[must_use]
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        out.push_str(&self.text);
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Number of spans in this tree, including `self`.
    #[must_use]
    pub fn span_count(&self) -> usize {
        1 + self.children.iter().map(Self::span_count).sum::<usize>()
    }
}
