//! One-shot conversion sessions.

use tessera_dom::DomTree;
use tessera_html::parse_document;

use crate::{RenderBlock, RenderConfig, RenderError, Segmenter};

/// Converts one document and keeps the result.
///
/// The first successful [`parse`](Self::parse) computes the block sequence;
/// every later call returns that same sequence and ignores its argument.
/// Create a new session to convert another document.
#[derive(Debug, Clone)]
pub struct ParserSession {
    config: RenderConfig,
    blocks: Vec<RenderBlock>,
    completed: bool,
}

impl ParserSession {
    /// A fresh session that has not parsed anything yet.
    #[must_use]
    pub const fn new(config: RenderConfig) -> Self {
        Self {
            config,
            blocks: Vec::new(),
            completed: false,
        }
    }

    /// Convert `html` into render blocks, or return the cached blocks if this
    /// session already completed a parse.
    ///
    /// Warnings about skipped input go through the process-wide
    /// [`warn_once`](tessera_common::warning::warn_once) set, which sessions
    /// never reset. Hosts that want a converted document to report its
    /// warnings again call
    /// [`clear_warnings`](tessera_common::warning::clear_warnings) themselves.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ImageDecode`] under
    /// [`ImageErrorPolicy::Abort`](crate::ImageErrorPolicy::Abort). A failed
    /// parse leaves the session uncompleted.
    pub fn parse(&mut self, html: &str) -> Result<&[RenderBlock], RenderError> {
        if !self.completed {
            let tree = parse_document(html);
            self.blocks = segment_document(&tree, &self.config)?;
            self.completed = true;
        }
        Ok(&self.blocks)
    }

    /// Whether a parse has completed and its result is cached.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// The cached blocks; empty before the first successful parse.
    #[must_use]
    pub fn blocks(&self) -> &[RenderBlock] {
        &self.blocks
    }

    /// The settings this session converts with.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Take ownership of the cached blocks.
    #[must_use]
    pub fn into_blocks(self) -> Vec<RenderBlock> {
        self.blocks
    }
}

/// Segment an already-built tree, starting at its body.
///
/// Documents without a body fall back to the document element; a tree with
/// no element at all yields no blocks.
///
/// # Errors
///
/// See [`Segmenter::segment`].
pub fn segment_document(
    tree: &DomTree,
    config: &RenderConfig,
) -> Result<Vec<RenderBlock>, RenderError> {
    match tree.body().or_else(|| tree.document_element()) {
        Some(root) => Segmenter::new(tree, config).segment(root),
        None => Ok(Vec::new()),
    }
}

/// Convert `html` in a throwaway session.
///
/// # Errors
///
/// See [`ParserSession::parse`].
pub fn render_html(html: &str, config: RenderConfig) -> Result<Vec<RenderBlock>, RenderError> {
    let mut session = ParserSession::new(config);
    let _ = session.parse(html)?;
    Ok(session.into_blocks())
}
