//! Effective (accumulated) opacity.
//!
//! [CSS Color § 3.2 'opacity'](https://www.w3.org/TR/css-color-4/#transparency)
//!
//! "Opacity can be thought of as a postprocessing operation... applied to
//! the element and its descendants as a group."
//!
//! An element's perceived opacity is therefore the product of its own
//! declared opacity and every ancestor's, not an inherited property.

use wallaby_dom::{DomTree, NodeId};
use wallaby_style::resolved_style;

/// Compute the effective opacity of an element, in `[0, 1]` for any
/// well-formed document.
///
/// The element's own `opacity` declaration (1.0 when absent or
/// unparseable) multiplied by the parent element's effective opacity,
/// recursing to the root. Deliberately does not short-circuit on zero:
/// the value itself is the contract, the visibility gate lives in the
/// oracle.
#[must_use]
pub fn effective_opacity(tree: &DomTree, id: NodeId) -> f64 {
    let own = resolved_style(tree, id, "opacity")
        .parse::<f64>()
        .unwrap_or(1.0);
    match tree.parent_element(id) {
        Some(parent) => own * effective_opacity(tree, parent),
        None => own,
    }
}
