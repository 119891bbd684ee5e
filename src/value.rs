use crate::error::DecodeResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{self, Display};

/// Loosely-typed input: a string, or a mapping from string keys to values.
///
/// Values are produced at the boundary (form parameters, parsed JSON, CSV rows)
/// and only ever read by decoders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    String(String),
    Map(BTreeMap<String, Value>),
}

impl Value {
    /// Builds a mapping from key/value pairs.
    pub fn map<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        entries.into_iter().collect()
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Map(_) => None,
        }
    }

    #[must_use]
    pub fn as_map(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            Value::String(_) => None,
        }
    }

    /// Looks up `key` when this value is a mapping.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Parses JSON text into a `Value`.
    ///
    /// # Errors
    /// Returns `DecodeError::Input` if the text is not JSON, or if it contains
    /// anything other than strings and objects.
    pub fn from_json_str(text: &str) -> DecodeResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Parses YAML text into a `Value`.
    ///
    /// # Errors
    /// Returns `DecodeError::Input` if the text is not YAML, or if it contains
    /// anything other than strings and string-keyed mappings. Unquoted YAML
    /// scalars like `4` or `true` are numbers and booleans, and are rejected.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(text: &str) -> DecodeResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", serde_json::Value::from(s.as_str())),
            Value::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: ", serde_json::Value::from(key.as_str()))?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
        }
    }
}

/// Strings render bare; mappings render as JSON, with nested keys and
/// strings quoted and escaped the way `serde_json` writes them.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Map(_) => self.fmt_nested(f),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(map: BTreeMap<String, Value>) -> Self {
        Value::Map(map)
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Value::from("red").to_string(), "red");

        let point = Value::map([("x", "10"), ("y", "12")]);
        assert_eq!(point.to_string(), r#"{"x": "10", "y": "12"}"#);

        let nested = Value::map([("center", point)]);
        assert_eq!(
            nested.to_string(),
            r#"{"center": {"x": "10", "y": "12"}}"#
        );
        assert_eq!(Value::Map(BTreeMap::new()).to_string(), "{}");
    }

    #[test]
    fn test_display_escapes_as_json() {
        let v = Value::map([("k\"ey", "a\u{1}b\u{7f}")]);
        assert_eq!(v.to_string(), "{\"k\\\"ey\": \"a\\u0001b\u{7f}\"}");
    }

    #[test]
    fn test_accessors() {
        let v = Value::map([("a", "1")]);
        assert_eq!(v.get("a"), Some(&Value::from("1")));
        assert_eq!(v.get("b"), None);
        assert!(v.as_str().is_none());
        assert_eq!(Value::from("s").as_str(), Some("s"));
        assert!(Value::from("s").get("a").is_none());
    }
}
