//! Capabilities the host application provides.
//!
//! The converter never fetches, decodes pixels, lays out text, or opens URLs.
//! Blocks only describe what to do; these traits are how a host does it.

use tessera_style::Style;

use crate::{ImageBlock, ImageSource, TextSpan};

/// Turns image sources into displayable images.
pub trait ImageHost {
    /// The host's displayable image type.
    type Image;

    /// Fetch (and cache) a remote image. Retries and caching are the host's
    /// business.
    fn network(&self, url: &str) -> Self::Image;

    /// Build an image from encoded bytes already in memory.
    fn memory(&self, bytes: &[u8]) -> Self::Image;
}

impl ImageBlock {
    /// Hand this image to the host loader matching its source.
    pub fn load<H: ImageHost + ?Sized>(&self, host: &H) -> H::Image {
        match &self.source {
            ImageSource::Network { url } => host.network(url),
            ImageSource::Memory { bytes } => host.memory(bytes),
        }
    }
}

/// Opens link targets on user interaction.
pub trait LinkHandler {
    /// Whether the platform can open `url`.
    fn can_open(&self, url: &str) -> bool;

    /// Open `url`.
    fn open(&mut self, url: &str);
}

/// Visitor for rendering a styled text tree.
///
/// `text` is called for the span's own text (when non-empty) before its
/// children are visited. `activation` is the span's own target or, failing
/// that, the nearest ancestor's, so nested text inside a link stays tappable.
pub trait SpanRenderer {
    /// Called before a span's text and children.
    fn enter(&mut self, _span: &TextSpan) {}

    /// A run of text in a single style.
    fn text(&mut self, text: &str, style: &Style, activation: Option<&str>);

    /// Called after a span's children.
    fn leave(&mut self, _span: &TextSpan) {}
}

impl TextSpan {
    /// Check and open this span's activation target.
    ///
    /// Returns whether the URL was opened; spans without a target, or with a
    /// target the handler cannot open, return `false`.
    pub fn activate(&self, handler: &mut dyn LinkHandler) -> bool {
        match self.activation.as_deref() {
            Some(url) if handler.can_open(url) => {
                handler.open(url);
                true
            }
            _ => false,
        }
    }

    /// Visit this tree depth-first with `renderer`.
    pub fn walk<R: SpanRenderer + ?Sized>(&self, renderer: &mut R) {
        self.walk_with(renderer, None);
    }

    fn walk_with<R: SpanRenderer + ?Sized>(&self, renderer: &mut R, inherited: Option<&str>) {
        let activation = self.activation.as_deref().or(inherited);
        renderer.enter(self);
        if !self.text.is_empty() {
            renderer.text(&self.text, &self.style, activation);
        }
        for child in &self.children {
            child.walk_with(renderer, activation);
        }
        renderer.leave(self);
    }
}
