use serde_json::Value;
use std::fmt;

/// The JSON kind of a dynamic value.
///
/// Used by shape-mismatch diagnostics to say what a typed accessor expected
/// and what it actually resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Returns the kind tag of a dynamic value.
    ///
    /// # Example
    ///
    /// ```
    /// use dynjson::JsonKind;
    /// use serde_json::json;
    ///
    /// assert_eq!(JsonKind::of(&json!(42)), JsonKind::Number);
    /// assert_eq!(JsonKind::of(&json!({"a": 1})), JsonKind::Object);
    /// ```
    pub fn of(value: &Value) -> JsonKind {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_of_each_variant() {
        assert_eq!(JsonKind::of(&json!(null)), JsonKind::Null);
        assert_eq!(JsonKind::of(&json!(true)), JsonKind::Bool);
        assert_eq!(JsonKind::of(&json!(1.5)), JsonKind::Number);
        assert_eq!(JsonKind::of(&json!("s")), JsonKind::String);
        assert_eq!(JsonKind::of(&json!([])), JsonKind::Array);
        assert_eq!(JsonKind::of(&json!({})), JsonKind::Object);
    }

    #[test]
    fn test_display_names() {
        assert_eq!(JsonKind::Bool.to_string(), "boolean");
        assert_eq!(JsonKind::Object.to_string(), "object");
    }
}
