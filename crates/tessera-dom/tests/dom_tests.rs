//! Tests for DOM tree construction, text content, and serialization.

use tessera_dom::{DomTree, ElementData, NodeId, NodeType};

/// Helper to create an element node and append it to `parent`.
fn append_element(tree: &mut DomTree, parent: NodeId, tag: &str) -> NodeId {
    tree.append(parent, NodeType::Element(ElementData::new(tag)))
}

fn append_text(tree: &mut DomTree, parent: NodeId, text: &str) -> NodeId {
    tree.append(parent, NodeType::Text(text.to_string()))
}

/// `<html><head></head><body><div>A<p>B</p>C</div></body></html>`
fn sample_document() -> (DomTree, NodeId, NodeId) {
    let mut tree = DomTree::new();
    let html = append_element(&mut tree, NodeId::ROOT, "html");
    let _head = append_element(&mut tree, html, "head");
    let body = append_element(&mut tree, html, "body");
    let div = append_element(&mut tree, body, "div");
    let _ = append_text(&mut tree, div, "A");
    let p = append_element(&mut tree, div, "p");
    let _ = append_text(&mut tree, p, "B");
    let _ = append_text(&mut tree, div, "C");
    (tree, body, div)
}

#[test]
fn test_append_sets_parent_and_children() {
    let (tree, body, div) = sample_document();

    assert_eq!(tree.parent(div), Some(body));
    assert_eq!(tree.children(body), &[div]);
    assert_eq!(tree.children(div).len(), 3);
}

#[test]
fn test_document_element_and_body() {
    let (tree, body, _) = sample_document();

    let html = tree.document_element().unwrap();
    assert!(tree.as_element(html).unwrap().is("html"));
    assert_eq!(tree.body(), Some(body));
}

#[test]
fn test_body_missing() {
    let mut tree = DomTree::new();
    let _ = append_element(&mut tree, NodeId::ROOT, "html");
    assert_eq!(tree.body(), None);
}

#[test]
fn test_text_content_in_tree_order() {
    let (tree, body, _) = sample_document();
    assert_eq!(tree.text_content(body), "ABC");
}

#[test]
fn test_outer_html() {
    let (tree, _, div) = sample_document();
    assert_eq!(tree.outer_html(div), "<div>A<p>B</p>C</div>");
}

#[test]
fn test_outer_html_escapes_text() {
    let mut tree = DomTree::new();
    let p = append_element(&mut tree, NodeId::ROOT, "p");
    let _ = append_text(&mut tree, p, "1 < 2 & <img>");
    assert_eq!(tree.outer_html(p), "<p>1 &lt; 2 &amp; &lt;img&gt;</p>");
}

#[test]
fn test_outer_html_raw_text_element() {
    let mut tree = DomTree::new();
    let style = append_element(&mut tree, NodeId::ROOT, "style");
    let _ = append_text(&mut tree, style, "a > b { color: red }");
    assert_eq!(tree.outer_html(style), "<style>a > b { color: red }</style>");
}

#[test]
fn test_attributes_serialized_in_sorted_order() {
    let mut tree = DomTree::new();
    let a = tree.append(
        NodeId::ROOT,
        NodeType::Element(
            ElementData::new("a")
                .with_attr("title", "t")
                .with_attr("href", "http://x"),
        ),
    );
    assert_eq!(tree.outer_html(a), r#"<a href="http://x" title="t"></a>"#);
}

#[test]
fn test_has_descendant_element() {
    let (mut tree, body, div) = sample_document();
    assert!(!tree.has_descendant_element(body, "img"));

    let p = tree.children(div)[1];
    let _ = append_element(&mut tree, p, "IMG");
    assert!(tree.has_descendant_element(body, "img"));
    assert!(!tree.has_descendant_element(p, "p"));
}
