//! Visible-text extraction for the Wallaby text extractor.
//!
//! # Scope
//!
//! Given an element in a rendered DOM tree, produce the text a sighted
//! user would perceive inside it: whitespace collapsed, line breaks at
//! block boundaries, hidden content excluded.
//!
//! This crate implements:
//! - **Geometry probe** — an element's rendered bounding box, including
//!   the scoped style override needed to measure `display: none` elements
//!   without disturbing the document.
//! - **Opacity accumulator** — effective opacity as the product of an
//!   element's own opacity and all its ancestors'.
//! - **Visibility oracle** — the `is_shown` predicate composing style,
//!   geometry, opacity, and element-kind-specific rules (TITLE, OPTION,
//!   OPTGROUP, MAP, AREA, hidden INPUT).
//! - **Text collector** — the `visible_text` walk assembling normalized
//!   lines in document order.
//!
//! A call requires exclusive access to its tree (`&mut DomTree`): the
//! probe transiently mutates inline style, restoring it before returning.
//! Calls on different trees are fully independent.

/// Error taxonomy for the extraction surface.
pub mod error;
/// Bounding-box measurement and the scoped style override.
pub mod geometry;
/// Effective (accumulated) opacity.
pub mod opacity;
/// Normalized visible-text collection.
pub mod text;
/// The `is_shown` visibility predicate.
pub mod visibility;

pub use error::TextError;
pub use geometry::bounding_box;
pub use opacity::effective_opacity;
pub use text::visible_text;
pub use visibility::is_shown;
