//! Style resolution for the Wallaby text extractor.
//!
//! # Scope
//!
//! The visibility rules need point-in-time answers to "what is this
//! element's effective `display` / `visibility` / `opacity`?". With the
//! full cascade out of scope, this crate resolves a property by consulting,
//! in order:
//!
//! - the element's **declared** (inline) value, walking ancestors when the
//!   declared value is the literal `inherit` keyword — legacy non-cascading
//!   engines surface the keyword instead of resolving it;
//! - the nearest ancestor's value for **inherited** properties
//!   ([CSS Cascading § 7.1 Inherited Properties](https://www.w3.org/TR/css-cascade-4/#inherited-property));
//! - the property's **computed default**: for `display`, the per-tag
//!   user-agent value ([WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html)).
//!
//! Absence is the empty string; resolution never fails.

/// User-agent default display values per [WHATWG HTML § 15 Rendering](https://html.spec.whatwg.org/multipage/rendering.html).
pub mod defaults;
/// Property resolution over a DOM tree.
pub mod resolver;

pub use defaults::default_display;
pub use resolver::{StyleSnapshot, is_block_level, resolved_style, style_snapshot};
