//! [§ 13.3 Serializing HTML fragments](https://html.spec.whatwg.org/multipage/parsing.html#serialising-html-fragments)

use crate::{DomTree, NodeId, NodeType};

/// "If current node is an area, base, br, col, embed, hr, img, input, link,
/// meta, source, track or wbr element, then continue on to the next child node
/// at this point."
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose text children are emitted literally.
const RAW_TEXT_ELEMENTS: &[&str] = &[
    "style", "script", "xmp", "iframe", "noembed", "noframes", "plaintext",
];

impl DomTree {
    /// Serialize a node and its subtree to markup (the `outerHTML` of an
    /// element, the escaped data of a text node).
    #[must_use]
    pub fn outer_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize_node(id, false, &mut out);
        out
    }

    /// Serialize only the children of a node (`innerHTML`).
    #[must_use]
    pub fn inner_html(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.serialize_children(id, &mut out);
        out
    }

    fn serialize_children(&self, id: NodeId, out: &mut String) {
        let raw = self
            .as_element(id)
            .is_some_and(|e| RAW_TEXT_ELEMENTS.iter().any(|t| e.is(t)));
        for &child in self.children(id) {
            self.serialize_node(child, raw, out);
        }
    }

    fn serialize_node(&self, id: NodeId, raw_text: bool, out: &mut String) {
        let Some(node) = self.get(id) else { return };

        match &node.node_type {
            NodeType::Document => {
                for &child in &node.children {
                    self.serialize_node(child, false, out);
                }
            }
            NodeType::Element(data) => {
                // HTML element names serialize in lowercase.
                let name = data.tag_name.to_ascii_lowercase();
                out.push('<');
                out.push_str(&name);
                for (attr, value) in &data.attrs {
                    out.push(' ');
                    out.push_str(attr);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.iter().any(|t| data.is(t)) {
                    return;
                }

                self.serialize_children(id, out);
                out.push_str("</");
                out.push_str(&name);
                out.push('>');
            }
            NodeType::Text(text) if raw_text => out.push_str(text),
            NodeType::Text(text) => escape_into(text, false, out),
            NodeType::Comment(text) => {
                out.push_str("<!--");
                out.push_str(text);
                out.push_str("-->");
            }
        }
    }
}

/// "Escaping a string ... means running the following steps:
/// Replace any occurrence of the "&" character by the string "&amp;".
/// Replace any occurrences of the U+00A0 NO-BREAK SPACE character by the string "&nbsp;".
/// If the algorithm was invoked in the attribute mode, replace any occurrences
/// of the """ character by the string "&quot;".
/// If the algorithm was not invoked in the attribute mode, replace any
/// occurrences of the "<" character by the string "&lt;", and any occurrences
/// of the ">" character by the string "&gt;"."
fn escape_into(text: &str, attribute_mode: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute_mode => out.push_str("&quot;"),
            '<' if !attribute_mode => out.push_str("&lt;"),
            '>' if !attribute_mode => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
}
