use thiserror::Error;

use crate::kind::JsonKind;

/// Errors produced by [`Document`](crate::Document) operations.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input bytes are not well-formed JSON, or a typed re-decode did
    /// not match the destination shape.
    #[error("invalid JSON: {0}")]
    Decode(#[source] serde_json::Error),

    /// The document is well-formed JSON but its top level is not an object.
    #[error("document root is not a JSON object")]
    RootNotObject,

    /// The value tree could not be serialized back to JSON bytes.
    #[error("failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// A typed accessor resolved a value of a different kind than requested.
    ///
    /// Absent paths never produce this error; they yield the accessor's
    /// zero value instead. A mismatch means the path resolved and the data
    /// violates the caller's shape assumption.
    #[error("expected {expected} at \"{path}\", found {found}")]
    ShapeMismatch {
        /// The key path that resolved to the offending value, joined with
        /// `/`, including the element index for array accessors.
        path: String,
        expected: JsonKind,
        found: JsonKind,
    },
}
