//! Block segmentation: splitting a document into text runs and images.
//!
//! A subtree without images becomes one styled text block. A subtree with an
//! image somewhere inside is split at its direct children: consecutive
//! image-free children are gathered into one pending run, and every child
//! that holds or is an image flushes that run and is segmented on its own.

use tessera_common::warning::warn_once;
use tessera_dom::{DomTree, NodeId, NodeType};
use tessera_style::{Style, TagStyles};

use crate::inline::{InlineBuilder, InlineSource};
use crate::{ImageErrorPolicy, ImageProbe, RenderBlock, RenderConfig, RenderError, resolve_image};

/// Walks a DOM tree and emits render blocks in document order.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter<'a> {
    tree: &'a DomTree,
    config: &'a RenderConfig,
    tags: TagStyles,
    inline: InlineBuilder<'a>,
}

impl<'a> Segmenter<'a> {
    /// A segmenter over `tree` using `config`.
    #[must_use]
    pub const fn new(tree: &'a DomTree, config: &'a RenderConfig) -> Self {
        let tags = config.tag_styles();
        Self {
            tree,
            config,
            tags,
            inline: InlineBuilder::new(tree, tags),
        }
    }

    /// Segment the subtree at `root`, starting from the configured default
    /// style.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::ImageDecode`] for an undecodable data URL when
    /// the policy is [`ImageErrorPolicy::Abort`].
    pub fn segment(&self, root: NodeId) -> Result<Vec<RenderBlock>, RenderError> {
        let mut blocks = Vec::new();
        self.segment_node(root, &self.config.default_style, &mut blocks)?;
        Ok(blocks)
    }

    /// Whether a node can be folded into a text run, i.e. holds no image
    /// according to the configured [`ImageProbe`].
    #[must_use]
    pub fn is_inline_safe(&self, id: NodeId) -> bool {
        match self.config.image_probe {
            ImageProbe::Markup => !self.tree.outer_html(id).contains("<img"),
            ImageProbe::Structural => {
                let is_img = self.tree.as_element(id).is_some_and(|e| e.is("img"));
                !is_img && !self.tree.has_descendant_element(id, "img")
            }
        }
    }

    fn segment_node(
        &self,
        id: NodeId,
        parent: &Style,
        out: &mut Vec<RenderBlock>,
    ) -> Result<(), RenderError> {
        let Some(node) = self.tree.get(id) else {
            return Ok(());
        };

        match &node.node_type {
            // STEP 1: images resolve directly and have nothing to recurse into.
            NodeType::Element(element) if element.is("img") => self.push_image(id, out),
            // STEP 2: image-free subtrees become one text block.
            NodeType::Element(_) if self.is_inline_safe(id) => {
                if let Some(span) = self.inline.build(InlineSource::Element(id), parent) {
                    out.push(RenderBlock::StyledText(span));
                }
                Ok(())
            }
            NodeType::Element(_) | NodeType::Document => self.split_block(id, parent, out),
            NodeType::Text(_) => {
                self.flush(&[id], parent, out);
                Ok(())
            }
            NodeType::Comment(_) => Ok(()),
        }
    }

    /// STEP 3: split a node already known to hold an image at its direct
    /// children. Each child is probed once, here.
    fn split_block(
        &self,
        id: NodeId,
        parent: &Style,
        out: &mut Vec<RenderBlock>,
    ) -> Result<(), RenderError> {
        let style = match self.tree.as_element(id) {
            Some(element) => {
                self.tags
                    .resolve(parent, Some(&element.tag_name), element.attr("style"))
            }
            None => *parent,
        };

        let mut pending: Vec<NodeId> = Vec::new();
        for &child in self.tree.children(id) {
            let Some(child_node) = self.tree.get(child) else {
                continue;
            };
            match &child_node.node_type {
                NodeType::Text(_) => pending.push(child),
                NodeType::Element(element) if element.is("img") => {
                    self.flush(&pending, &style, out);
                    pending.clear();
                    self.push_image(child, out)?;
                }
                NodeType::Element(_) if self.is_inline_safe(child) => pending.push(child),
                NodeType::Element(_) => {
                    self.flush(&pending, &style, out);
                    pending.clear();
                    self.split_block(child, &style, out)?;
                }
                NodeType::Comment(_) | NodeType::Document => {}
            }
        }
        self.flush(&pending, &style, out);

        Ok(())
    }

    /// Emit the pending run as one text block, if it has any content.
    fn flush(&self, run: &[NodeId], parent: &Style, out: &mut Vec<RenderBlock>) {
        if run.is_empty() {
            return;
        }
        if let Some(span) = self.inline.build(InlineSource::Run(run), parent) {
            out.push(RenderBlock::StyledText(span));
        }
    }

    fn push_image(&self, id: NodeId, out: &mut Vec<RenderBlock>) -> Result<(), RenderError> {
        let Some(element) = self.tree.as_element(id) else {
            return Ok(());
        };

        match resolve_image(element, self.config.base_url.as_deref()) {
            Ok(Some(image)) => out.push(RenderBlock::Image(image)),
            Ok(None) => {}
            Err(err) => match self.config.on_image_error {
                ImageErrorPolicy::Skip => warn_once("image", &format!("skipping image: {err}")),
                ImageErrorPolicy::Abort => return Err(err),
            },
        }
        Ok(())
    }
}
