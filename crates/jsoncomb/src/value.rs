//! The JSON value model produced by the grammar.

use alloc::{collections::BTreeMap, string::String, vec::Vec};

/// The mapping type backing [`JsonValue::Object`].
///
/// Built from parsed pairs in encounter order, so a duplicated key ends up
/// with the value of its last occurrence.
pub type Map = BTreeMap<String, JsonValue>;

/// The sequence type backing [`JsonValue::Array`].
pub type Array = Vec<JsonValue>;

/// A parsed JSON value.
///
/// Two representational limits are inherited from the parser: numbers are
/// bounded 32-bit signed integers, and strings hold the raw span between
/// quotes with no escape sequences decoded.
///
/// # Examples
///
/// ```
/// use jsoncomb::{JsonValue, Map};
///
/// let mut map = Map::new();
/// map.insert("key".into(), JsonValue::String("value".into()));
/// let v = JsonValue::Object(map);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.  The `cfg_attr` conditional keeps the core
// crate free of a serde dependency in normal builds.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq)]
pub enum JsonValue {
    /// The literal `null`.
    Null,
    /// The literals `true` and `false`.
    Bool(bool),
    /// A bounded signed integer.
    Number(i32),
    /// Raw text between quotes.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A key-unique mapping.
    Object(Map),
}

impl Default for JsonValue {
    fn default() -> Self {
        Self::Null
    }
}

impl From<bool> for JsonValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for JsonValue {
    fn from(v: i32) -> Self {
        Self::Number(v)
    }
}

impl From<String> for JsonValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for JsonValue {
    fn from(v: &str) -> Self {
        Self::String(String::from(v))
    }
}

impl From<Array> for JsonValue {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for JsonValue {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl JsonValue {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: JsonValue::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: JsonValue::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: JsonValue::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: JsonValue::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: JsonValue::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: JsonValue::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }
}

/// Renders the value as JSON text.
///
/// String contents are written back verbatim, mirroring the parser's lack of
/// escape decoding; for any value this parser can produce, displaying and
/// re-parsing yields the value again.
impl core::fmt::Display for JsonValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JsonValue::Null => f.write_str("null"),
            JsonValue::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            JsonValue::Number(n) => write!(f, "{n}"),
            JsonValue::String(s) => write!(f, "\"{s}\""),
            JsonValue::Array(items) => {
                f.write_str("[")?;
                let mut first = true;
                for v in items {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            JsonValue::Object(map) => {
                f.write_str("{")?;
                let mut first = true;
                for (k, v) in map {
                    if !first {
                        f.write_str(",")?;
                    }
                    first = false;
                    write!(f, "\"{k}\":{v}")?;
                }
                f.write_str("}")
            }
        }
    }
}
