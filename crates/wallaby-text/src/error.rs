//! Error taxonomy for visible-text extraction.
//!
//! A single condition is an error: being handed a node that is not an
//! element. Everything else the walk can encounter — missing style values,
//! absent ancestors, unreferenced image maps — is an ordinary "not
//! visible" or "empty" outcome, so extraction is total over well-formed
//! trees.

use thiserror::Error;

/// Errors raised by the extraction surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// The supplied node reference does not refer to an Element.
    ///
    /// Not retried; propagates directly to the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
