//! Styled text tree construction for inline content.

use std::slice;

use tessera_dom::{DomTree, NodeId, NodeType};
use tessera_style::{Style, TagStyles};

use crate::TextSpan;

/// What to build a span from.
#[derive(Debug, Clone, Copy)]
pub enum InlineSource<'a> {
    /// An element: its tag and `style` attribute adjust the parent style and
    /// its children are walked.
    Element(NodeId),
    /// Loose sibling nodes with no wrapping element; the parent style is used
    /// unchanged.
    Run(&'a [NodeId]),
}

/// Builds [`TextSpan`] trees from DOM subtrees.
#[derive(Debug, Clone, Copy)]
pub struct InlineBuilder<'a> {
    tree: &'a DomTree,
    tags: TagStyles,
}

impl<'a> InlineBuilder<'a> {
    /// A builder reading from `tree` with the given tag table.
    #[must_use]
    pub const fn new(tree: &'a DomTree, tags: TagStyles) -> Self {
        Self { tree, tags }
    }

    /// Build a span for `source` under `parent`.
    ///
    /// The walked sequence is the element's children, or the run itself:
    /// - A text node in first position is trimmed and becomes the span's own
    ///   text. Text nodes anywhere else become child spans verbatim, unless
    ///   literally empty.
    /// - Elements with no descendant text are dropped; other elements recurse
    ///   with this span's style as their parent.
    /// - Comments are skipped but still occupy their position.
    ///
    /// Returns `None` when the span would have neither text nor children.
    #[must_use]
    pub fn build(&self, source: InlineSource<'_>, parent: &Style) -> Option<TextSpan> {
        let (style, nodes, activation) = match source {
            InlineSource::Element(id) => {
                let Some(element) = self.tree.as_element(id) else {
                    return self.build(InlineSource::Run(slice::from_ref(&id)), parent);
                };
                let style = self.tags.resolve(
                    parent,
                    Some(&element.tag_name),
                    element.attr("style"),
                );
                let activation = if element.is("a") {
                    element.attr("href").map(str::to_string)
                } else {
                    None
                };
                (style, self.tree.children(id), activation)
            }
            InlineSource::Run(nodes) => (*parent, nodes, None),
        };

        let mut text = String::new();
        let mut children = Vec::new();

        for (position, &id) in nodes.iter().enumerate() {
            let Some(node) = self.tree.get(id) else { continue };
            match &node.node_type {
                NodeType::Text(content) if position == 0 => {
                    content.trim().clone_into(&mut text);
                }
                NodeType::Text(content) => {
                    if !content.is_empty() {
                        children.push(TextSpan::leaf(style, content.as_str()));
                    }
                }
                NodeType::Element(_) => {
                    if self.tree.text_content(id).is_empty() {
                        continue;
                    }
                    if let Some(child) = self.build(InlineSource::Element(id), &style) {
                        children.push(child);
                    }
                }
                NodeType::Comment(_) | NodeType::Document => {}
            }
        }

        if text.is_empty() && children.is_empty() {
            return None;
        }

        Some(TextSpan {
            style,
            text,
            children,
            activation,
        })
    }
}
