//! Integration tests for style resolution across element hierarchies.

use wallaby_common::warning::clear_warnings;
use wallaby_dom::{DomTree, ElementData, NodeId, NodeType, StyleDeclaration};
use wallaby_style::{is_block_level, resolved_style, style_snapshot};

/// Helper to create an element with inline style text under `parent`.
fn alloc_element(tree: &mut DomTree, parent: NodeId, tag: &str, style: &str) -> NodeId {
    let mut data = ElementData::new(tag);
    data.style = StyleDeclaration::from_css_text(style);
    let id = tree.alloc(NodeType::Element(data));
    tree.append_child(parent, id);
    id
}

#[test]
fn test_ua_defaults_by_tag() {
    let mut tree = DomTree::new();
    let html = alloc_element(&mut tree, NodeId::ROOT, "html", "");
    let body = alloc_element(&mut tree, html, "body", "");
    let p = alloc_element(&mut tree, body, "p", "");
    let span = alloc_element(&mut tree, p, "span", "");
    let script = alloc_element(&mut tree, body, "script", "");
    let li = alloc_element(&mut tree, body, "li", "");

    assert_eq!(resolved_style(&tree, body, "display"), "block");
    assert_eq!(resolved_style(&tree, p, "display"), "block");
    assert_eq!(resolved_style(&tree, span, "display"), "inline");
    assert_eq!(resolved_style(&tree, script, "display"), "none");
    assert_eq!(resolved_style(&tree, li, "display"), "list-item");
}

#[test]
fn test_inline_declaration_overrides_ua_default() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, NodeId::ROOT, "div", "display: inline");
    assert_eq!(resolved_style(&tree, div, "display"), "inline");
}

#[test]
fn test_property_name_lookup_is_case_insensitive() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, NodeId::ROOT, "div", "Visibility: Hidden");
    // Names normalize; declared value text is preserved as written.
    assert_eq!(resolved_style(&tree, div, "VISIBILITY"), "Hidden");
}

#[test]
fn test_inherit_keyword_resolves_through_multiple_levels() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, NodeId::ROOT, "div", "display: none");
    let middle = alloc_element(&mut tree, outer, "div", "display: inherit");
    let inner = alloc_element(&mut tree, middle, "span", "display: inherit");

    assert_eq!(resolved_style(&tree, inner, "display"), "none");
}

#[test]
fn test_visibility_inherits_across_intervening_elements() {
    let mut tree = DomTree::new();
    let outer = alloc_element(&mut tree, NodeId::ROOT, "div", "visibility: hidden");
    let middle = alloc_element(&mut tree, outer, "div", "");
    let inner = alloc_element(&mut tree, middle, "span", "");

    assert_eq!(resolved_style(&tree, inner, "visibility"), "hidden");

    // Redeclaring at an intermediate level takes effect below it.
    tree.as_element_mut(middle)
        .unwrap()
        .style
        .set_property("visibility", "visible");
    assert_eq!(resolved_style(&tree, inner, "visibility"), "visible");
    assert_eq!(resolved_style(&tree, outer, "visibility"), "hidden");
}

#[test]
fn test_unknown_property_resolves_to_empty_and_warns_once() {
    let mut tree = DomTree::new();
    let div = alloc_element(&mut tree, NodeId::ROOT, "div", "");

    // Start from a clean slate as a host would when loading a new document.
    clear_warnings();

    // No computed default exists for the property: the query warns (once,
    // deduplicated across repeats) and resolves to the empty string.
    assert_eq!(resolved_style(&tree, div, "writing-mode"), "");
    assert_eq!(resolved_style(&tree, div, "writing-mode"), "");
    assert_eq!(resolved_style(&tree, div, "float"), "");

    // A declared value for the same property still wins over the warning
    // path: resolution only falls through to defaults on absence.
    tree.as_element_mut(div)
        .unwrap()
        .style
        .set_property("writing-mode", "vertical-rl");
    assert_eq!(resolved_style(&tree, div, "writing-mode"), "vertical-rl");

    clear_warnings();
}

#[test]
fn test_snapshot_matches_individual_reads() {
    let mut tree = DomTree::new();
    let div = alloc_element(
        &mut tree,
        NodeId::ROOT,
        "div",
        "display: inline-block; opacity: 0.25",
    );
    let snapshot = style_snapshot(&tree, div);
    assert_eq!(snapshot.display, "inline-block");
    assert_eq!(snapshot.visibility, "visible");
    assert_eq!(snapshot.opacity, "0.25");
    assert!(is_block_level(&tree, div));
}
