use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DocumentError;
use crate::kind::JsonKind;

/// A read-only JSON document supporting chained key-path access.
///
/// A `Document` owns exactly one decoded [`Value`] tree. It is created by
/// decoding a byte buffer with [`Document::from_slice`] (the root must be a
/// JSON object) or returned by [`Document::get_object`] /
/// [`Document::get_object_array`] when descending into sub-objects. There is
/// no mutation API; once decoded, a document is an immutable snapshot.
///
/// Typed accessors follow one rule throughout: an absent path yields the
/// accessor's zero value (`""`, `0.0`, `false`, empty sequence), while a
/// path that resolves to a value of the wrong kind yields
/// [`DocumentError::ShapeMismatch`]. The two cases are never conflated.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Decodes a byte buffer containing one JSON document into a `Document`.
    ///
    /// # Errors
    ///
    /// - [`DocumentError::Decode`] if the bytes are not well-formed JSON.
    /// - [`DocumentError::RootNotObject`] if the top-level value is an
    ///   array or scalar rather than an object.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    ///
    /// let doc = Document::from_slice(br#"{"name": "ada"}"#).unwrap();
    /// assert_eq!(doc.get_string(&["name"]).unwrap(), "ada");
    ///
    /// assert!(Document::from_slice(b"[1, 2]").is_err());
    /// ```
    pub fn from_slice(data: &[u8]) -> Result<Document, DocumentError> {
        let root: Value = serde_json::from_slice(data).map_err(DocumentError::Decode)?;
        if !root.is_object() {
            return Err(DocumentError::RootNotObject);
        }
        Ok(Document { root })
    }

    /// Serializes the document back to JSON bytes.
    ///
    /// Uses the codec's default formatting; no key ordering or
    /// pretty-printing is guaranteed.
    pub fn to_vec(&self) -> Result<Vec<u8>, DocumentError> {
        serde_json::to_vec(&self.root).map_err(DocumentError::Encode)
    }

    /// Re-decodes the document's value into a statically-typed destination.
    ///
    /// The value is serialized to bytes and decoded again so that the
    /// codec's own struct mapping performs the field assignment; this crate
    /// does not duplicate it.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct User {
    ///     name: String,
    ///     age: f64,
    /// }
    ///
    /// let doc = Document::from_slice(br#"{"name": "ada", "age": 36}"#).unwrap();
    /// let user: User = doc.decode_into().unwrap();
    /// assert_eq!(user.name, "ada");
    /// assert_eq!(user.age, 36.0);
    /// ```
    pub fn decode_into<T: DeserializeOwned>(&self) -> Result<T, DocumentError> {
        let bytes = serde_json::to_vec(&self.root).map_err(DocumentError::Encode)?;
        serde_json::from_slice(&bytes).map_err(DocumentError::Decode)
    }

    /// Borrows the document's underlying dynamic value.
    pub fn root(&self) -> &Value {
        &self.root
    }

    /// Resolves a key path against the document.
    ///
    /// Starting from the root, each key in turn is looked up in the current
    /// value, which must be an object. Traversal stops at the first
    /// non-object value or absent key. The empty path resolves to the root
    /// itself.
    ///
    /// Returns `None` when the path does not resolve. A path that resolves
    /// to an explicit JSON `null` returns `Some(&Value::Null)`, so null and
    /// absent stay distinguishable.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    /// use serde_json::json;
    ///
    /// let doc = Document::from_slice(br#"{"a": {"b": 42}}"#).unwrap();
    /// assert_eq!(doc.get(&["a", "b"]), Some(&json!(42)));
    /// assert_eq!(doc.get(&["a", "missing"]), None);
    /// assert_eq!(doc.get(&[]), Some(doc.root()));
    /// ```
    pub fn get(&self, path: &[&str]) -> Option<&Value> {
        let mut current = &self.root;
        for key in path {
            current = current.as_object()?.get(*key)?;
        }
        Some(current)
    }

    /// Returns `true` iff the path resolves and the value is not `null`.
    ///
    /// Collapses "absent" and "explicitly null" into `false`; use
    /// [`Document::get`] when the distinction matters.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    ///
    /// let doc = Document::from_slice(br#"{"a": 1, "b": null}"#).unwrap();
    /// assert!(doc.is_valid(&["a"]));
    /// assert!(!doc.is_valid(&["b"]));
    /// assert!(!doc.is_valid(&["c"]));
    /// ```
    pub fn is_valid(&self, path: &[&str]) -> bool {
        matches!(self.get(path), Some(value) if !value.is_null())
    }

    /// Gets the value at the path as a new `Document`.
    ///
    /// An absent path yields a null-marker document: every accessor on it
    /// reports not-found at best, and [`Document::is_valid`] on the empty
    /// path is `false`.
    pub fn get_object(&self, path: &[&str]) -> Result<Document, DocumentError> {
        match self.get(path) {
            None => Ok(Document { root: Value::Null }),
            Some(Value::Object(map)) => Ok(Document {
                root: Value::Object(map.clone()),
            }),
            Some(other) => Err(mismatch(path, JsonKind::Object, other)),
        }
    }

    /// Gets the value at the path as a string slice.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    ///
    /// let doc = Document::from_slice(br#"{"title": "My video!"}"#).unwrap();
    /// assert_eq!(doc.get_string(&["title"]).unwrap(), "My video!");
    /// assert_eq!(doc.get_string(&["missing"]).unwrap(), "");
    /// assert!(doc.get_string(&["title", "deeper"]).unwrap().is_empty());
    /// ```
    pub fn get_string(&self, path: &[&str]) -> Result<&str, DocumentError> {
        match self.get(path) {
            None => Ok(""),
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(mismatch(path, JsonKind::String, other)),
        }
    }

    /// Gets the value at the path as a double-precision number.
    ///
    /// All JSON numbers collapse to `f64`; values beyond double precision
    /// lose fidelity.
    pub fn get_number(&self, path: &[&str]) -> Result<f64, DocumentError> {
        match self.get(path) {
            None => Ok(0.0),
            Some(Value::Number(n)) => Ok(n.as_f64().unwrap_or(0.0)),
            Some(other) => Err(mismatch(path, JsonKind::Number, other)),
        }
    }

    /// Gets the value at the path as a boolean.
    pub fn get_bool(&self, path: &[&str]) -> Result<bool, DocumentError> {
        match self.get(path) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(other) => Err(mismatch(path, JsonKind::Bool, other)),
        }
    }

    /// Gets the value at the path as a slice of dynamic values.
    pub fn get_array(&self, path: &[&str]) -> Result<&[Value], DocumentError> {
        match self.get(path) {
            None => Ok(&[]),
            Some(Value::Array(items)) => Ok(items),
            Some(other) => Err(mismatch(path, JsonKind::Array, other)),
        }
    }

    /// Gets the value at the path as a sequence of `Document`s, one per
    /// array element.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::Document;
    ///
    /// let doc = Document::from_slice(br#"{"users": [{"name": "ada"}, {"name": "lin"}]}"#).unwrap();
    /// let users = doc.get_object_array(&["users"]).unwrap();
    /// assert_eq!(users.len(), 2);
    /// assert_eq!(users[1].get_string(&["name"]).unwrap(), "lin");
    /// ```
    pub fn get_object_array(&self, path: &[&str]) -> Result<Vec<Document>, DocumentError> {
        let items = self.get_array(path)?;
        let mut docs = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Object(map) => docs.push(Document {
                    root: Value::Object(map.clone()),
                }),
                other => return Err(element_mismatch(path, index, JsonKind::Object, other)),
            }
        }
        Ok(docs)
    }

    /// Gets the value at the path as a sequence of string slices.
    pub fn get_string_array(&self, path: &[&str]) -> Result<Vec<&str>, DocumentError> {
        let items = self.get_array(path)?;
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(s) => out.push(s.as_str()),
                other => return Err(element_mismatch(path, index, JsonKind::String, other)),
            }
        }
        Ok(out)
    }

    /// Gets the value at the path as a sequence of numbers.
    pub fn get_number_array(&self, path: &[&str]) -> Result<Vec<f64>, DocumentError> {
        let items = self.get_array(path)?;
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Number(n) => out.push(n.as_f64().unwrap_or(0.0)),
                other => return Err(element_mismatch(path, index, JsonKind::Number, other)),
            }
        }
        Ok(out)
    }

    /// Gets the value at the path as a sequence of booleans.
    pub fn get_bool_array(&self, path: &[&str]) -> Result<Vec<bool>, DocumentError> {
        let items = self.get_array(path)?;
        let mut out = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::Bool(b) => out.push(*b),
                other => return Err(element_mismatch(path, index, JsonKind::Bool, other)),
            }
        }
        Ok(out)
    }
}

fn mismatch(path: &[&str], expected: JsonKind, found: &Value) -> DocumentError {
    DocumentError::ShapeMismatch {
        path: path.join("/"),
        expected,
        found: JsonKind::of(found),
    }
}

fn element_mismatch(path: &[&str], index: usize, expected: JsonKind, found: &Value) -> DocumentError {
    DocumentError::ShapeMismatch {
        path: format!("{}/{}", path.join("/"), index),
        expected,
        found: JsonKind::of(found),
    }
}
