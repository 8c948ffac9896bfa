//! Dynamic values interpolated into a template

use serde::Serialize;
use serde_json::Value;
use std::fmt::Display;
use std::sync::Arc;

/// A value placed between two literal segments
///
/// Primitives are serialized into the message text. Objects and functions
/// are references: they travel to the sink untouched, and two args are the
/// same only when they point at the same allocation.
#[derive(Debug, Clone)]
pub enum Arg {
    /// null, bool, number or string
    Json(Value),
    /// Text of a value that could not be JSON encoded
    Text(String),
    /// Array or object reference
    Object(Arc<Value>),
    /// Named function reference
    Function(Arc<str>),
}

impl Arg {
    pub fn object(value: Value) -> Self {
        Arg::Object(Arc::new(value))
    }

    pub fn function(name: &str) -> Self {
        Arg::Function(Arc::from(name))
    }

    /// Best-effort JSON encoding, falling back to the `Display` text
    pub fn encode<T>(value: &T) -> Self
    where
        T: Serialize + Display + ?Sized,
    {
        match serde_json::to_value(value) {
            Ok(json) => Arg::from(json),
            Err(e) => {
                log::debug!("JSON encoding failed ({}), using display text", e);
                Arg::Text(value.to_string())
            }
        }
    }

    /// Objects and functions, which are never serialized into the text
    pub fn is_reference(&self) -> bool {
        matches!(self, Arg::Object(_) | Arg::Function(_))
    }

    /// Identity comparison: value equality for primitives, pointer
    /// equality for references
    pub fn same(&self, other: &Arg) -> bool {
        match (self, other) {
            (Arg::Json(a), Arg::Json(b)) => a == b,
            (Arg::Text(a), Arg::Text(b)) => a == b,
            (Arg::Object(a), Arg::Object(b)) => Arc::ptr_eq(a, b),
            (Arg::Function(a), Arg::Function(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// JSON text of a primitive (strings quoted)
    pub fn to_json_text(&self) -> String {
        match self {
            Arg::Json(value) => value.to_string(),
            Arg::Text(text) => text.clone(),
            Arg::Object(value) => value.to_string(),
            Arg::Function(name) => format!("[Function: {}]", name),
        }
    }

    /// Text used when the value sits inside a styled message: strings are
    /// inserted verbatim, everything else as JSON
    pub fn to_inline_text(&self) -> String {
        match self {
            Arg::Json(Value::String(s)) => s.clone(),
            other => other.to_json_text(),
        }
    }

    /// JSON form handed to a console-style sink
    pub fn inspect(&self) -> Value {
        match self {
            Arg::Json(value) => value.clone(),
            Arg::Text(text) => Value::String(text.clone()),
            Arg::Object(value) => Value::clone(value),
            Arg::Function(name) => Value::String(format!("[Function: {}]", name)),
        }
    }
}

impl From<Value> for Arg {
    fn from(value: Value) -> Self {
        match value {
            Value::Array(_) | Value::Object(_) => Arg::object(value),
            primitive => Arg::Json(primitive),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Json(Value::String(value.to_string()))
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Json(Value::String(value))
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Json(Value::Bool(value))
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Json(Value::from(value))
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        // NaN and infinities have no JSON form and become null
        Arg::Json(Value::from(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::{Error as _, Serializer};
    use serde_json::json;
    use std::fmt;

    struct Unencodable;

    impl Serialize for Unencodable {
        fn serialize<S: Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("circular structure"))
        }
    }

    impl fmt::Display for Unencodable {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "[object Object]")
        }
    }

    #[test]
    fn test_from_value_classifies_references() {
        assert!(Arg::from(json!({"a": 1})).is_reference());
        assert!(Arg::from(json!([1, 2])).is_reference());
        assert!(!Arg::from(json!(5)).is_reference());
        assert!(!Arg::from(json!(null)).is_reference());
        assert!(Arg::function("onClick").is_reference());
    }

    #[test]
    fn test_same_uses_identity_for_objects() {
        let a = Arg::object(json!({"a": 1}));
        let b = Arg::object(json!({"a": 1}));
        assert!(a.same(&a.clone()));
        assert!(!a.same(&b));
    }

    #[test]
    fn test_same_uses_value_for_primitives() {
        assert!(Arg::from(1i64).same(&Arg::from(1i64)));
        assert!(!Arg::from(1i64).same(&Arg::from(2i64)));
        assert!(!Arg::from("1").same(&Arg::from(1i64)));
    }

    #[test]
    fn test_encode_falls_back_to_display() {
        let arg = Arg::encode(&Unencodable);
        assert_eq!(arg.to_json_text(), "[object Object]");
    }

    #[test]
    fn test_encode_serializable() {
        let arg = Arg::encode("hi");
        assert_eq!(arg.to_json_text(), "\"hi\"");
        assert_eq!(arg.to_inline_text(), "hi");
    }

    #[test]
    fn test_nan_becomes_null() {
        assert_eq!(Arg::from(f64::NAN).to_json_text(), "null");
    }

    #[test]
    fn test_inspect_function() {
        assert_eq!(
            Arg::function("handler").inspect(),
            json!("[Function: handler]")
        );
    }
}
