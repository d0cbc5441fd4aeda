//! Element data: attributes, inline style, rendered measurements, and the
//! closed set of tag kinds the visibility rules dispatch on.

use std::collections::HashMap;

use serde::Serialize;
use strum_macros::{Display, EnumString};

use crate::style_decl::StyleDeclaration;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A rendered width/height measurement.
///
/// [§ 5 Element Geometry](https://drafts.csswg.org/cssom-view/#extensions-to-the-element-interface)
///
/// A plain value type: measurements are produced at query time and owned by
/// nobody.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    /// Rendered width in CSS pixels.
    pub width: f64,
    /// Rendered height in CSS pixels.
    pub height: f64,
}

impl Size {
    /// The collapsed (unrendered) measurement.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Construct a measurement.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether both dimensions are strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// The element tags the visibility rules treat specially.
///
/// Rather than scattering tag-name string comparisons through the decision
/// sequence, the special cases form a closed, auditable set. Tags outside
/// this set parse to an error and get the generic element treatment.
///
/// Tag names are matched ASCII case-insensitively per
/// [§ 2.3 Case-sensitivity](https://html.spec.whatwg.org/multipage/infrastructure.html#case-sensitivity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumString)]
#[strum(ascii_case_insensitive, serialize_all = "UPPERCASE")]
pub enum ElementKind {
    /// [§ 4.2.2 The title element](https://html.spec.whatwg.org/multipage/semantics.html#the-title-element)
    Title,
    /// [§ 4.10.7 The select element](https://html.spec.whatwg.org/multipage/form-elements.html#the-select-element)
    Select,
    /// [§ 4.10.10 The option element](https://html.spec.whatwg.org/multipage/form-elements.html#the-option-element)
    Option,
    /// [§ 4.10.9 The optgroup element](https://html.spec.whatwg.org/multipage/form-elements.html#the-optgroup-element)
    Optgroup,
    /// [§ 4.8.13 The map element](https://html.spec.whatwg.org/multipage/image-maps.html#the-map-element)
    Map,
    /// [§ 4.8.14 The area element](https://html.spec.whatwg.org/multipage/image-maps.html#the-area-element)
    Area,
    /// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#the-input-element)
    Input,
    /// [§ 4.5.27 The br element](https://html.spec.whatwg.org/multipage/text-level-semantics.html#the-br-element)
    Br,
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// - "Elements have an associated namespace, namespace prefix, local name..."
/// - "An element has an associated attribute list."
///
/// NOTE: We only store the local name, attributes, the inline style
/// declaration, and the rendered measurements the host layout produced.
/// Full spec compliance would require namespace handling, custom elements, etc.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementData {
    /// "An element's local name"
    pub tag_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
    /// [CSSOM § 6.6 The CSSStyleDeclaration Interface](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
    ///
    /// The inline `style` declaration. Mutable: the geometry probe writes
    /// (and restores) `display`/`position`/`visibility` here transiently.
    pub style: StyleDeclaration,
    /// The size the host layout measured for this element when rendered.
    ///
    /// An element whose own resolved `display` is `none` reports a zero
    /// offset size regardless of this value; see the geometry probe.
    pub intrinsic_size: Size,
    /// Native bounding-box measurement for elements that expose one
    /// (e.g. vector-graphic shapes). Consulted before offset geometry.
    pub native_box: Option<Size>,
}

impl ElementData {
    /// Create an element with no attributes, no inline style, and a
    /// collapsed measurement.
    #[must_use]
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            attrs: AttributesMap::new(),
            style: StyleDeclaration::new(),
            intrinsic_size: Size::ZERO,
            native_box: None,
        }
    }

    /// The special-case kind of this element, if its tag is one the
    /// visibility rules dispatch on.
    #[must_use]
    pub fn kind(&self) -> Option<ElementKind> {
        self.tag_name.parse().ok()
    }

    /// Whether this element's tag matches `kind` (ASCII case-insensitive).
    #[must_use]
    pub fn is_kind(&self, kind: ElementKind) -> bool {
        self.kind() == Some(kind)
    }

    /// Returns the element's `name` attribute value if present.
    ///
    /// [§ 4.8.13 The map element](https://html.spec.whatwg.org/multipage/image-maps.html#attr-map-name)
    /// "The name attribute gives the map a name so that it can be referenced."
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.attrs.get("name").map(String::as_str)
    }

    /// Returns the element's `type` attribute value if present.
    ///
    /// [§ 4.10.5 The input element](https://html.spec.whatwg.org/multipage/input.html#attr-input-type)
    /// "The type attribute controls the data type (and associated control)
    /// of the element."
    #[must_use]
    pub fn input_type(&self) -> Option<&str> {
        self.attrs.get("type").map(String::as_str)
    }

    /// Returns the element's `usemap` attribute value if present.
    ///
    /// [§ 4.8.13.1 Authoring image maps](https://html.spec.whatwg.org/multipage/image-maps.html#attr-hyperlink-usemap)
    /// "The usemap attribute, if present, can indicate that the image has an
    /// associated image map."
    #[must_use]
    pub fn usemap(&self) -> Option<&str> {
        self.attrs.get("usemap").map(String::as_str)
    }
}
