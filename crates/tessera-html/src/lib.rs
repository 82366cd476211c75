//! HTML tree building for tessera.
//!
//! # Scope
//!
//! Tokenization and tree construction are delegated to
//! [html5ever](https://docs.rs/html5ever), which implements the WHATWG
//! parsing algorithm including implicit `<html>`, `<head>`, and `<body>`
//! insertion. This crate only copies the resulting reference-counted tree into
//! the arena-based [`DomTree`] that the block converter reads.
//!
//! # Not Carried Over
//!
//! - Doctype and processing-instruction nodes
//! - `<template>` contents (stored outside the child list by html5ever)
//! - Namespaces (only local names are kept)

use std::fmt::Write as _;

use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, parse_document as parse_html};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tessera_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType};

/// [§ 13.2 Parsing HTML documents](https://html.spec.whatwg.org/multipage/parsing.html)
///
/// Parse a complete HTML document into a [`DomTree`].
///
/// Parsing never fails: malformed markup is normalized by the tree builder.
#[must_use]
pub fn parse_document(html: &str) -> DomTree {
    let dom = parse_html(RcDom::default(), ParseOpts::default()).one(html);

    let mut tree = DomTree::new();
    for child in dom.document.children.borrow().iter() {
        copy_node(child, NodeId::ROOT, &mut tree);
    }
    tree
}

/// Recursively copy an html5ever node and its children under `parent`.
fn copy_node(handle: &Handle, parent: NodeId, tree: &mut DomTree) {
    let node_type = match &handle.data {
        NodeData::Element { name, attrs, .. } => {
            let attrs: AttributesMap = attrs
                .borrow()
                .iter()
                .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
                .collect();
            NodeType::Element(ElementData {
                tag_name: name.local.to_string(),
                attrs,
            })
        }
        NodeData::Text { contents } => NodeType::Text(contents.borrow().to_string()),
        NodeData::Comment { contents } => NodeType::Comment(contents.to_string()),
        NodeData::Document | NodeData::Doctype { .. } | NodeData::ProcessingInstruction { .. } => {
            return;
        }
    };

    let id = tree.append(parent, node_type);
    for child in handle.children.borrow().iter() {
        copy_node(child, id, tree);
    }
}

/// Format a DOM subtree as an indented outline for debugging.
///
/// Spaces in text nodes are shown as `·` and newlines as `\n` so that
/// whitespace-only nodes stay visible.
#[must_use]
pub fn format_tree(tree: &DomTree, id: NodeId) -> String {
    let mut out = String::new();
    format_node(tree, id, 0, &mut out);
    out
}

fn format_node(tree: &DomTree, id: NodeId, indent: usize, out: &mut String) {
    let Some(node) = tree.get(id) else { return };
    let prefix = "  ".repeat(indent);

    let _ = match &node.node_type {
        NodeType::Document => writeln!(out, "{prefix}Document"),
        NodeType::Element(data) if data.attrs.is_empty() => {
            writeln!(out, "{prefix}<{}>", data.tag_name)
        }
        NodeType::Element(data) => {
            let attrs: Vec<String> = data
                .attrs
                .iter()
                .map(|(k, v)| {
                    if v.is_empty() {
                        k.clone()
                    } else {
                        format!("{k}=\"{v}\"")
                    }
                })
                .collect();
            writeln!(out, "{prefix}<{} {}>", data.tag_name, attrs.join(" "))
        }
        NodeType::Text(data) => {
            let display = data.replace('\n', "\\n").replace(' ', "\u{00B7}");
            writeln!(out, "{prefix}\"{display}\"")
        }
        NodeType::Comment(data) => writeln!(out, "{prefix}<!-- {data} -->"),
    };

    for &child_id in tree.children(id) {
        format_node(tree, child_id, indent + 1, out);
    }
}
