//! Inline style declarations.
//!
//! [CSSOM § 6.6 The CSSStyleDeclaration Interface](https://drafts.csswg.org/cssom/#the-cssstyledeclaration-interface)
//!
//! "A CSS declaration block is an ordered map of properties to values."
//!
//! This is the mutable per-element style surface the geometry probe's
//! scoped override writes to and restores. Only declared values live here;
//! resolution against inheritance and user-agent defaults happens in the
//! style resolver.

use std::collections::HashMap;

/// An element's inline style declaration block.
///
/// Property names are stored lowercase; lookups are by the lowercase name.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyleDeclaration {
    props: HashMap<String, String>,
}

impl StyleDeclaration {
    /// An empty declaration block.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// [CSSOM § 6.7.2 Parse a CSS declaration block](https://drafts.csswg.org/cssom/#parse-a-css-declaration-block)
    ///
    /// Parse declaration text as found in a `style="..."` attribute.
    /// Declarations missing a `:` separator or a non-empty name/value are
    /// dropped, matching the error-recovery behavior of CSS parsing.
    #[must_use]
    pub fn from_css_text(text: &str) -> Self {
        let mut decl = Self::new();
        for piece in text.split(';') {
            let Some((name, value)) = piece.split_once(':') else {
                continue;
            };
            let name = name.trim();
            let value = value.trim();
            if !name.is_empty() && !value.is_empty() {
                decl.set_property(name, value);
            }
        }
        decl
    }

    /// [CSSOM § 6.6.3 getPropertyValue](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-getpropertyvalue)
    ///
    /// The declared value for `name`, if any.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&str> {
        self.props.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// [CSSOM § 6.6.3 setProperty](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-setproperty)
    ///
    /// Declare `name: value`, replacing any previous declaration.
    pub fn set_property(&mut self, name: &str, value: &str) {
        let _ = self
            .props
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    /// [CSSOM § 6.6.3 removeProperty](https://drafts.csswg.org/cssom/#dom-cssstyledeclaration-removeproperty)
    ///
    /// Remove the declaration for `name`, returning its previous value.
    pub fn remove_property(&mut self, name: &str) -> Option<String> {
        self.props.remove(&name.to_ascii_lowercase())
    }

    /// Whether the block declares nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.props.is_empty()
    }

    /// [CSSOM § 6.7.3 Serialize a CSS declaration block](https://drafts.csswg.org/cssom/#serialize-a-css-declaration-block)
    ///
    /// Serialize as `name: value; ...;` text. Declarations are emitted in
    /// sorted property order so the output is deterministic.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut names: Vec<&String> = self.props.keys().collect();
        names.sort();
        let mut out = String::new();
        for name in names {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(name);
            out.push_str(": ");
            out.push_str(&self.props[name]);
            out.push(';');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_declaration_text() {
        let decl = StyleDeclaration::from_css_text("display: none; Color:red");
        assert_eq!(decl.get_property("display"), Some("none"));
        assert_eq!(decl.get_property("color"), Some("red"));
        assert_eq!(decl.get_property("visibility"), None);
    }

    #[test]
    fn test_parse_drops_malformed_pieces() {
        let decl = StyleDeclaration::from_css_text("display; : red; width: ;height:0");
        assert_eq!(decl.get_property("display"), None);
        assert_eq!(decl.get_property("width"), None);
        assert_eq!(decl.get_property("height"), Some("0"));
    }

    #[test]
    fn test_set_remove_round_trip() {
        let mut decl = StyleDeclaration::new();
        decl.set_property("Display", "inline");
        assert_eq!(decl.get_property("display"), Some("inline"));
        assert_eq!(decl.remove_property("DISPLAY"), Some("inline".to_string()));
        assert!(decl.is_empty());
    }

    #[test]
    fn test_css_text_is_sorted_and_terminated() {
        let mut decl = StyleDeclaration::new();
        decl.set_property("visibility", "hidden");
        decl.set_property("display", "none");
        assert_eq!(decl.css_text(), "display: none; visibility: hidden;");
    }
}
