//! Chained key-path lookups and typed accessors over dynamically-typed JSON.
//!
//! This crate wraps a decoded [`serde_json::Value`] tree in a read-only
//! [`Document`] and layers two things on top: key-path traversal (ordered
//! sequences of object-field keys, no wildcards or array indices) and typed
//! extraction of the resolved value. It is meant for reading
//! loosely-structured JSON without declaring full schema structs up front;
//! parsing itself is delegated entirely to `serde_json`.
//!
//! Typed accessors treat the two failure modes differently by design: an
//! absent path is a benign, common case and yields a zero value, while a
//! path that resolves to the wrong JSON kind yields
//! [`DocumentError::ShapeMismatch`] so shape bugs surface instead of being
//! masked by a deceptive default.
//!
//! # Example
//!
//! ```
//! use dynjson::Document;
//!
//! let data = br#"{
//!     "title": "My video!",
//!     "tags": ["drama", "romantic"],
//!     "seconds": 513,
//!     "metadata": null
//! }"#;
//!
//! let doc = Document::from_slice(data).unwrap();
//! assert_eq!(doc.get_string(&["title"]).unwrap(), "My video!");
//! assert_eq!(doc.get_string_array(&["tags"]).unwrap(), vec!["drama", "romantic"]);
//! assert_eq!(doc.get_number(&["seconds"]).unwrap(), 513.0);
//!
//! // "metadata" is present but null; "views" is absent. Both are invalid,
//! // but only the absent one defaults through a typed accessor.
//! assert!(!doc.is_valid(&["metadata"]));
//! assert!(!doc.is_valid(&["views"]));
//! assert_eq!(doc.get_number(&["views"]).unwrap(), 0.0);
//! assert!(doc.get_number(&["metadata"]).is_err());
//! ```

pub mod document;
pub mod error;
pub mod kind;

pub use document::Document;
pub use error::DocumentError;
pub use kind::JsonKind;
