//! Integration tests for building a DOM tree from HTML source.

use tessera_dom::{DomTree, NodeId, NodeType};
use tessera_html::parse_document;

/// Helper to get element by tag name (first match, depth-first)
fn find_element(tree: &DomTree, from: NodeId, tag: &str) -> Option<NodeId> {
    if let Some(data) = tree.as_element(from)
        && data.tag_name == tag
    {
        return Some(from);
    }
    for &child_id in tree.children(from) {
        if let Some(found) = find_element(tree, child_id, tag) {
            return Some(found);
        }
    }
    None
}

#[test]
fn test_fragment_gets_implicit_body() {
    let tree = parse_document("<p>Hello</p>");

    let html = tree.document_element().unwrap();
    assert_eq!(tree.as_element(html).unwrap().tag_name, "html");

    let body = tree.body().unwrap();
    let p = find_element(&tree, body, "p").unwrap();
    assert_eq!(tree.parent(p), Some(body));
    assert_eq!(tree.text_content(p), "Hello");
}

#[test]
fn test_attributes_are_copied() {
    let tree = parse_document(r#"<a href="http://x" style="color:#112233">t</a>"#);
    let a = find_element(&tree, NodeId::ROOT, "a").unwrap();
    let data = tree.as_element(a).unwrap();

    assert_eq!(data.attr("href"), Some("http://x"));
    assert_eq!(data.attr("style"), Some("color:#112233"));
    assert_eq!(data.attr("title"), None);
}

#[test]
fn test_tag_names_are_lowercased() {
    let tree = parse_document("<DIV><IMG SRC='a.png'></DIV>");
    let img = find_element(&tree, NodeId::ROOT, "img").unwrap();
    assert_eq!(tree.as_element(img).unwrap().attr("src"), Some("a.png"));
}

#[test]
fn test_mixed_content_order() {
    let tree = parse_document(r#"<div>A<img src="i.png">C</div>"#);
    let div = find_element(&tree, NodeId::ROOT, "div").unwrap();
    let children = tree.children(div);

    assert_eq!(children.len(), 3);
    assert_eq!(tree.as_text(children[0]), Some("A"));
    assert!(tree.as_element(children[1]).unwrap().is("img"));
    assert_eq!(tree.as_text(children[2]), Some("C"));
}

#[test]
fn test_character_references_decoded() {
    let tree = parse_document("<p>a &lt;img&gt; &amp; b</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    assert_eq!(tree.text_content(p), "a <img> & b");
    assert_eq!(tree.outer_html(p), "<p>a &lt;img&gt; &amp; b</p>");
}

#[test]
fn test_comments_are_kept() {
    let tree = parse_document("<p>x<!-- note -->y</p>");
    let p = find_element(&tree, NodeId::ROOT, "p").unwrap();
    let kinds: Vec<bool> = tree
        .children(p)
        .iter()
        .map(|&id| matches!(tree.get(id).unwrap().node_type, NodeType::Comment(_)))
        .collect();
    assert_eq!(kinds, vec![false, true, false]);
}

#[test]
fn test_empty_document() {
    let tree = parse_document("");
    let body = tree.body().unwrap();
    assert!(tree.children(body).is_empty());
}
