//! Tests for DOM tree construction, traversal, and document-level queries.

use wallaby_dom::{AttributesMap, DomTree, ElementData, NodeId, NodeType, StyleDeclaration};

/// Helper to create an element node and return its NodeId.
fn alloc_element(tree: &mut DomTree, tag: &str) -> NodeId {
    tree.alloc(NodeType::Element(ElementData::new(tag)))
}

/// Helper to create an element carrying attributes.
fn alloc_element_with_attrs(tree: &mut DomTree, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
    let mut data = ElementData::new(tag);
    let mut map = AttributesMap::new();
    for (name, value) in attrs {
        let _ = map.insert((*name).to_string(), (*value).to_string());
    }
    data.attrs = map;
    tree.alloc(NodeType::Element(data))
}

// ========== construction and traversal ==========

#[test]
fn test_new_tree_has_document_root() {
    let tree = DomTree::new();
    assert_eq!(tree.root(), NodeId::ROOT);
    assert_eq!(tree.len(), 1);
    assert!(!tree.is_empty());
    assert!(tree.window_is_top_level());
}

#[test]
fn test_append_child_maintains_sibling_links() {
    let mut tree = DomTree::new();
    let parent = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, parent);

    let a = alloc_element(&mut tree, "a");
    let b = alloc_element(&mut tree, "b");
    tree.append_child(parent, a);
    tree.append_child(parent, b);

    assert_eq!(tree.children(parent), &[a, b]);
    assert_eq!(tree.parent(a), Some(parent));
    assert_eq!(tree.get(a).unwrap().next_sibling, Some(b));
    assert_eq!(tree.get(b).unwrap().prev_sibling, Some(a));
    assert_eq!(tree.get(b).unwrap().next_sibling, None);
}

#[test]
fn test_ancestors_walk_to_root() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let body = alloc_element(&mut tree, "body");
    tree.append_child(html, body);
    let p = alloc_element(&mut tree, "p");
    tree.append_child(body, p);

    let ancestors: Vec<NodeId> = tree.ancestors(p).collect();
    assert_eq!(ancestors, vec![body, html, NodeId::ROOT]);
}

#[test]
fn test_parent_element_skips_document() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);
    let body = alloc_element(&mut tree, "body");
    tree.append_child(html, body);

    assert_eq!(tree.parent_element(body), Some(html));
    // The html element's parent is the Document, which is not an element.
    assert_eq!(tree.parent_element(html), None);
}

#[test]
fn test_document_element() {
    let mut tree = DomTree::new();
    let comment = tree.alloc(NodeType::Comment("preamble".to_string()));
    tree.append_child(NodeId::ROOT, comment);
    let html = alloc_element(&mut tree, "html");
    tree.append_child(NodeId::ROOT, html);

    assert_eq!(tree.document_element(), Some(html));
}

// ========== node accessors ==========

#[test]
fn test_as_element_and_as_text() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, div);
    let text = tree.alloc(NodeType::Text("hello".to_string()));
    tree.append_child(div, text);

    assert_eq!(tree.as_element(div).unwrap().tag_name, "div");
    assert!(tree.as_element(text).is_none());
    assert_eq!(tree.as_text(text), Some("hello"));
    assert!(tree.as_text(div).is_none());
}

#[test]
fn test_text_content_concatenates_in_tree_order() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, "div");
    tree.append_child(NodeId::ROOT, div);
    let first = tree.alloc(NodeType::Text("one ".to_string()));
    tree.append_child(div, first);
    let span = alloc_element(&mut tree, "span");
    tree.append_child(div, span);
    let nested = tree.alloc(NodeType::Text("two ".to_string()));
    tree.append_child(span, nested);
    let last = tree.alloc(NodeType::Text("three".to_string()));
    tree.append_child(div, last);

    assert_eq!(tree.text_content(div), "one two three");
}

// ========== document-level queries ==========

#[test]
fn test_usemap_referent_finds_first_in_document_order() {
    let mut tree = DomTree::new();
    let body = alloc_element(&mut tree, "body");
    tree.append_child(NodeId::ROOT, body);
    let first = alloc_element_with_attrs(&mut tree, "img", &[("usemap", "#nav")]);
    tree.append_child(body, first);
    let second = alloc_element_with_attrs(&mut tree, "img", &[("usemap", "#nav")]);
    tree.append_child(body, second);

    assert_eq!(tree.usemap_referent("nav"), Some(first));
    assert_eq!(tree.usemap_referent("missing"), None);
}

#[test]
fn test_usemap_referent_requires_hash_prefix_match() {
    let mut tree = DomTree::new();
    // Declares the bare name, not the fragment form the attribute uses.
    let img = alloc_element_with_attrs(&mut tree, "img", &[("usemap", "nav")]);
    tree.append_child(NodeId::ROOT, img);

    assert_eq!(tree.usemap_referent("nav"), None);
}

// ========== inline style declarations ==========

#[test]
fn test_style_declaration_parses_css_text() {
    let style = StyleDeclaration::from_css_text("display: none; color: red");
    assert_eq!(style.get_property("display"), Some("none"));
    assert_eq!(style.get_property("color"), Some("red"));
    assert_eq!(style.get_property("position"), None);
}

#[test]
fn test_style_declaration_ignores_malformed_segments() {
    let style = StyleDeclaration::from_css_text("display: block; nonsense; : bare");
    assert_eq!(style.get_property("display"), Some("block"));
    assert_eq!(style.css_text(), "display: block;");
}

#[test]
fn test_style_declaration_set_and_remove_round_trip() {
    let mut style = StyleDeclaration::new();
    assert!(style.is_empty());

    style.set_property("Display", "inline");
    assert_eq!(style.get_property("display"), Some("inline"));

    assert_eq!(style.remove_property("display"), Some("inline".to_string()));
    assert!(style.is_empty());
}
