//! Bounding-box measurement.
//!
//! [CSSOM View § 5 Extensions to the Element Interface](https://drafts.csswg.org/cssom-view/#extensions-to-the-element-interface)
//!
//! An element hidden with `display: none` generates no boxes and measures
//! 0×0 even if it would render non-trivially once shown. To distinguish
//! "deliberately zero-sized" from "merely display: none", the probe
//! temporarily re-styles such an element (`visibility: hidden; position:
//! absolute; display: inline`), reads its offset size, and restores the
//! original declarations.
//!
//! The restore is load-bearing: leaking the override would corrupt the
//! host document's layout. It is therefore modeled as a guard whose `Drop`
//! puts the saved declarations back on every exit path, panics included.

use wallaby_dom::{DomTree, NodeId, Size};
use wallaby_style::resolved_style;

/// Offset-geometry model of
/// [CSSOM View § 5.1 offsetWidth / offsetHeight](https://drafts.csswg.org/cssom-view/#dom-htmlelement-offsetwidth):
/// an element whose own resolved `display` is `none` measures 0×0;
/// otherwise it reports the size the host layout assigned it.
#[must_use]
pub fn offset_size(tree: &DomTree, id: NodeId) -> Size {
    if resolved_style(tree, id, "display") == "none" {
        return Size::ZERO;
    }
    tree.as_element(id)
        .map_or(Size::ZERO, |data| data.intrinsic_size)
}

/// Measure an element's rendered bounding box.
///
/// - Elements exposing a native bounding-box primitive (vector-graphic
///   shapes) are measured through it directly.
/// - Elements currently participating in layout report their offset size.
/// - `display: none` elements are measured under the scoped override
///   described in the module docs; their style is restored before this
///   function returns.
///
/// Non-element nodes measure 0×0.
#[must_use]
pub fn bounding_box(tree: &mut DomTree, id: NodeId) -> Size {
    let Some(data) = tree.as_element(id) else {
        return Size::ZERO;
    };
    if let Some(native) = data.native_box {
        return native;
    }
    if resolved_style(tree, id, "display") != "none" {
        return offset_size(tree, id);
    }
    StyleOverride::apply(tree, id).measure()
}

/// The scoped style override: saved declarations go back on `Drop`.
struct StyleOverride<'a> {
    tree: &'a mut DomTree,
    id: NodeId,
    saved: Vec<(&'static str, Option<String>)>,
}

impl<'a> StyleOverride<'a> {
    /// The override that coaxes a box out of a `display: none` element
    /// without it ever becoming perceivable or affecting flow layout.
    const OVERRIDES: [(&'static str, &'static str); 3] = [
        ("visibility", "hidden"),
        ("position", "absolute"),
        ("display", "inline"),
    ];

    /// Save the current declarations for the override properties, then
    /// apply the override values.
    fn apply(tree: &'a mut DomTree, id: NodeId) -> Self {
        let mut saved = Vec::with_capacity(Self::OVERRIDES.len());
        if let Some(data) = tree.as_element_mut(id) {
            for (name, value) in Self::OVERRIDES {
                saved.push((name, data.style.get_property(name).map(str::to_string)));
                data.style.set_property(name, value);
            }
        }
        Self { tree, id, saved }
    }

    /// Read the offset size under the override.
    fn measure(&self) -> Size {
        offset_size(self.tree, self.id)
    }
}

impl Drop for StyleOverride<'_> {
    fn drop(&mut self) {
        let Some(data) = self.tree.as_element_mut(self.id) else {
            return;
        };
        for (name, value) in self.saved.drain(..) {
            match value {
                Some(original) => data.style.set_property(name, &original),
                None => {
                    let _ = data.style.remove_property(name);
                }
            }
        }
    }
}
