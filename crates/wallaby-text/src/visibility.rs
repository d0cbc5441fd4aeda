//! The `is_shown` visibility predicate.
//!
//! Determines whether a sighted user could perceive an element. The
//! decision is a fixed sequence: element-kind special cases first (some
//! elements delegate their visibility to another element entirely), then
//! resolved style, then accumulated opacity, then rendered geometry.

use wallaby_dom::{DomTree, ElementKind, NodeId};
use wallaby_style::resolved_style;

use crate::error::TextError;
use crate::geometry::bounding_box;
use crate::opacity::effective_opacity;
use crate::text::is_collapsible;

/// Decide whether the element `id` is perceivable.
///
/// With `ignore_opacity` set, fully transparent elements still count as
/// shown; the text collector uses this mode because transparent text
/// occupies layout space and is routinely revealed by scripting.
///
/// Delegating kinds resolve through their host element:
/// - TITLE is shown exactly when the document owns the top-level window.
/// - OPTION and OPTGROUP are shown when their enclosing SELECT is.
/// - MAP is shown when some element in the document references it via
///   `usemap` and that element is shown.
/// - AREA is shown when its enclosing MAP is.
///
/// A hidden INPUT (`type=hidden`, any casing) is never shown. Otherwise
/// the element must have resolved `visibility` other than `hidden`, no
/// `display: none` on itself or any ancestor, non-zero effective opacity
/// (unless ignored), and positive rendered size somewhere in its subtree.
///
/// # Errors
///
/// Returns [`TextError::InvalidArgument`] when `id` is not an element.
pub fn is_shown(tree: &mut DomTree, id: NodeId, ignore_opacity: bool) -> Result<bool, TextError> {
    let Some(data) = tree.as_element(id) else {
        return Err(TextError::InvalidArgument(
            "visibility is only defined for elements".to_string(),
        ));
    };
    let kind = data.kind();
    let hidden_input =
        kind == Some(ElementKind::Input) && data.input_type().is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
    // An empty name cannot be referenced; treat it as absent.
    let map_name = data
        .name()
        .filter(|name| !name.is_empty())
        .map(str::to_string);

    match kind {
        Some(ElementKind::Title) => return Ok(tree.window_is_top_level()),

        Some(ElementKind::Option | ElementKind::Optgroup) => {
            return match ancestor_of_kind(tree, id, ElementKind::Select) {
                Some(select) => is_shown(tree, select, ignore_opacity),
                None => Ok(false),
            };
        }

        Some(ElementKind::Map) => {
            let Some(name) = map_name else {
                return Ok(false);
            };
            return match tree.usemap_referent(&name) {
                Some(referent) => is_shown(tree, referent, ignore_opacity),
                None => Ok(false),
            };
        }

        Some(ElementKind::Area) => {
            return match ancestor_of_kind(tree, id, ElementKind::Map) {
                Some(map) => is_shown(tree, map, ignore_opacity),
                None => Ok(false),
            };
        }

        _ => {}
    }

    if hidden_input {
        return Ok(false);
    }
    if resolved_style(tree, id, "visibility") == "hidden" {
        return Ok(false);
    }
    if !displayed(tree, id) {
        return Ok(false);
    }
    if !ignore_opacity && effective_opacity(tree, id) <= 0.0 {
        return Ok(false);
    }
    Ok(has_positive_size(tree, id))
}

/// Whether the element participates in layout: neither it nor any
/// ancestor element resolves `display` to `none`.
fn displayed(tree: &DomTree, id: NodeId) -> bool {
    if resolved_style(tree, id, "display") == "none" {
        return false;
    }
    match tree.parent_element(id) {
        Some(parent) => displayed(tree, parent),
        None => true,
    }
}

/// Whether the element occupies perceivable space: a positive bounding
/// box, a directly contained text node with non-whitespace content, or a
/// descendant element that does.
fn has_positive_size(tree: &mut DomTree, id: NodeId) -> bool {
    if bounding_box(tree, id).is_positive() {
        return true;
    }
    let children = tree.children(id).to_vec();
    for child in children {
        if let Some(text) = tree.as_text(child) {
            if text.chars().any(|c| !is_collapsible(c)) {
                return true;
            }
        } else if tree.as_element(child).is_some() && has_positive_size(tree, child) {
            return true;
        }
    }
    false
}

/// Nearest ancestor element of the given kind, if any.
fn ancestor_of_kind(tree: &DomTree, id: NodeId, kind: ElementKind) -> Option<NodeId> {
    let mut current = tree.parent_element(id);
    while let Some(ancestor) = current {
        if tree.as_element(ancestor).is_some_and(|data| data.is_kind(kind)) {
            return Some(ancestor);
        }
        current = tree.parent_element(ancestor);
    }
    None
}
