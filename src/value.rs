//! An owned JSON document tree.

use alloc::{collections::BTreeMap, string::String, vec::Vec};
use core::fmt;

/// The members of a JSON object, ordered by key.
pub type Map = BTreeMap<String, Value>;

/// The elements of a JSON array.
pub type Array = Vec<Value>;

/// Any JSON value.
///
/// Numbers are `f64`, like the tree the event stream is usually folded
/// into; the raw literal text is available on the event itself for
/// consumers that need exact digits.
///
/// ```
/// use jsonshift::{Map, Value};
///
/// let mut map = Map::new();
/// map.insert("key".into(), Value::String("value".into()));
/// assert_eq!(Value::Object(map).to_string(), r#"{"key":"value"}"#);
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// `null`.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An array of values.
    Array(Array),
    /// An object.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

/// Writes `src` with JSON escaping: quotes, backslashes, and BMP control
/// characters (as `\uXXXX`).
fn write_escaped<W: fmt::Write>(src: &str, out: &mut W) -> fmt::Result {
    for c in src.chars() {
        match c {
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            c if c.is_control() && (c as u32) <= 0xFFFF => write!(out, "\\u{:04X}", c as u32)?,
            c => out.write_char(c)?,
        }
    }
    Ok(())
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => {
                f.write_str("\"")?;
                write_escaped(s, f)?;
                f.write_str("\"")
            }
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Object(members) => {
                f.write_str("{")?;
                for (i, (key, member)) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("\"")?;
                    write_escaped(key, f)?;
                    write!(f, "\":{member}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::vec;

    use super::{Map, Value};

    #[test]
    fn display_writes_compact_json() {
        let doc = Value::Object(Map::from([
            (
                "list".into(),
                Value::Array(vec![Value::Number(1.0), Value::Bool(true), Value::Null]),
            ),
            ("text".into(), Value::String("hi".into())),
        ]));
        assert_eq!(doc.to_string(), r#"{"list":[1,true,null],"text":"hi"}"#);
    }

    #[test]
    fn display_escapes_quotes_backslashes_and_controls() {
        let v = Value::String("a\"b\\c\nd".into());
        assert_eq!(v.to_string(), "\"a\\\"b\\\\c\\u000Ad\"");
    }

    #[test]
    fn from_impls() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(2.5), Value::Number(2.5));
        assert_eq!(Value::from("x"), Value::String("x".into()));
        assert_eq!(Value::default(), Value::Null);
    }
}
