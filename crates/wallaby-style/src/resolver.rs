//! Property resolution: declared values, `inherit` walking, inherited
//! properties, and computed defaults.
//!
//! [CSS Cascading § 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
//!
//! "The computed value is the result of resolving the specified value..."
//!
//! Values are read at query time, never cached; a result is only a
//! point-in-time snapshot of the tree's current style state.

use serde::Serialize;

use crate::defaults::default_display;
use wallaby_common::warning::warn_once;
use wallaby_dom::{DomTree, NodeId};

/// [CSS Cascading § 3.1 The inherit keyword](https://www.w3.org/TR/css-cascade-4/#inherit)
///
/// "The inherit CSS-wide keyword... the property takes the inherited value."
const INHERIT: &str = "inherit";

/// The style properties visibility decisions are made from.
///
/// A point-in-time read of the current tree state; nothing is cached and
/// there is no invariant beyond "these were the resolved values when asked".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSnapshot {
    /// Resolved `display` keyword.
    pub display: String,
    /// Resolved `visibility` keyword.
    pub visibility: String,
    /// Resolved `opacity` text (empty when undeclared).
    pub opacity: String,
}

/// Resolve the effective value of `property` for the element `id`.
///
/// [CSS Cascading § 4.4 Computed Values](https://www.w3.org/TR/css-cascade-4/#computed)
///
/// Lookup order:
/// 1. The element's declared (inline) value. A literal `inherit` keyword is
///    resolved from the nearest ancestor element — legacy non-cascading
///    engines surface the keyword instead of resolving it, so we walk up
///    ourselves, stopping at the tree root.
/// 2. For inherited properties
///    ([§ 7.1](https://www.w3.org/TR/css-cascade-4/#inherited-property)),
///    the nearest ancestor element's value.
/// 3. The property's computed default (`display` varies per tag).
///
/// Absence is the empty string. Non-element nodes resolve everything to the
/// default layer directly.
#[must_use]
pub fn resolved_style(tree: &DomTree, id: NodeId, property: &str) -> String {
    let property = property.to_ascii_lowercase();
    declared_value(tree, id, &property)
        .unwrap_or_else(|| default_value(tree, id, &property))
}

/// Steps 1 and 2 of the lookup: declared values and inheritance.
fn declared_value(tree: &DomTree, id: NodeId, property: &str) -> Option<String> {
    let data = tree.as_element(id)?;
    match data.style.get_property(property) {
        Some(INHERIT) => ancestor_value(tree, id, property),
        Some(value) => Some(value.to_string()),
        None if is_inherited(property) => ancestor_value(tree, id, property),
        None => None,
    }
}

/// Resolve from the nearest ancestor element, recursing toward the root.
fn ancestor_value(tree: &DomTree, id: NodeId, property: &str) -> Option<String> {
    let parent = tree.parent_element(id)?;
    declared_value(tree, parent, property)
}

/// [CSS Cascading § 7.1 Inherited Properties](https://www.w3.org/TR/css-cascade-4/#inherited-property)
///
/// "Some properties are inherited from an ancestor element to its
/// descendants."
///
/// Of the properties this resolver is asked about, only `visibility`
/// inherits ([CSS 2 § 11.2 'visibility'](https://www.w3.org/TR/CSS2/visufx.html#visibility):
/// "Inherited: yes"). `display` and `opacity` do not; accumulated opacity
/// is the opacity accumulator's job, not inheritance.
fn is_inherited(property: &str) -> bool {
    property == "visibility"
}

/// Step 3 of the lookup: the computed default.
fn default_value(tree: &DomTree, id: NodeId, property: &str) -> String {
    match property {
        // [WHATWG HTML § 15 Rendering] per-tag user-agent value.
        "display" => tree
            .as_element(id)
            .map(|data| default_display(&data.tag_name))
            .unwrap_or_default()
            .to_string(),

        // [CSS 2 § 11.2 'visibility'] "Initial: visible"
        "visibility" => "visible".to_string(),

        // [CSS Color § 3.2 'opacity'] declared-or-nothing; the accumulator
        // substitutes 1.0 for absence.
        "opacity" => String::new(),

        unknown => {
            warn_once("Style", &format!("no computed default for '{unknown}'"));
            String::new()
        }
    }
}

/// Capture the resolved `display`/`visibility`/`opacity` triple for `id`.
#[must_use]
pub fn style_snapshot(tree: &DomTree, id: NodeId) -> StyleSnapshot {
    StyleSnapshot {
        display: resolved_style(tree, id, "display"),
        visibility: resolved_style(tree, id, "visibility"),
        opacity: resolved_style(tree, id, "opacity"),
    }
}

/// Whether the element's resolved display makes it a block-level break in
/// text flow.
///
/// [CSS Display § 2.1 Outer Display Roles](https://www.w3.org/TR/css-display-3/#outer-role)
///
/// Only `block` and `inline-block` count: those are the display types that
/// force surrounding text onto separate lines in the collector's model.
/// Table and list-item display types participate in their own layout and
/// do not break lines here.
#[must_use]
pub fn is_block_level(tree: &DomTree, id: NodeId) -> bool {
    let display = resolved_style(tree, id, "display");
    display == "block" || display == "inline-block"
}
