//! Item values held by named containers and scalar slots

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// String-keyed attribute record (e.g. `{href, media}` for a stylesheet)
///
/// Fields keep the order they were inserted in.
pub type Record = IndexMap<String, Value>;

/// A single item stored in a container or scalar slot
///
/// Items are usually plain strings or attribute records, but flags and nested
/// lists are allowed so script records can carry `defer`/`async` and custom
/// containers can hold whatever the page configuration supplies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Boolean flag
    Bool(bool),
    /// Plain text
    Text(String),
    /// Ordered list of values
    List(Vec<Value>),
    /// Attribute record
    Record(Record),
}

impl Value {
    /// Build a record value from `(key, value)` pairs
    ///
    /// # Parameters
    /// * `pairs` - Attribute names and their values
    ///
    /// # Returns
    /// * `Value::Record` containing every pair
    pub fn record<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Value::Record(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Check whether the value counts as empty for the permissive guards
    ///
    /// Empty text, `false`, and empty lists or records are all empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Bool(flag) => !flag,
            Value::Text(text) => text.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Record(fields) => fields.is_empty(),
        }
    }

    /// Borrow the text of a `Text` value
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Borrow the fields of a `Record` value
    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Value::Record(fields) => Some(fields),
            _ => None,
        }
    }

    /// Look up a record field; non-record values have no fields
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.as_record().and_then(|fields| fields.get(key))
    }

    /// Look up a record field holding text
    pub fn text_field(&self, key: &str) -> Option<&str> {
        self.field(key).and_then(Value::as_text)
    }

    /// Check whether a record field is present and non-empty
    pub fn flag(&self, key: &str) -> bool {
        self.field(key).is_some_and(|value| !value.is_empty())
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Bool(true) => write!(f, "1"),
            Value::Bool(false) => Ok(()),
            Value::Text(text) => write!(f, "{}", text),
            Value::List(items) => {
                write!(f, "{}", itertools::join(items.iter(), ", "))
            }
            Value::Record(fields) => {
                write!(f, "{}", itertools::join(fields.values(), ", "))
            }
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Value::Bool(flag)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Record> for Value {
    fn from(fields: Record) -> Self {
        Value::Record(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emptiness() {
        assert!(Value::from("").is_empty());
        assert!(Value::from(false).is_empty());
        assert!(Value::List(Vec::new()).is_empty());
        assert!(Value::Record(Record::new()).is_empty());
        assert!(!Value::from("x").is_empty());
        assert!(!Value::from(true).is_empty());
    }

    #[test]
    fn test_record_fields() {
        let value = Value::record([("href", Value::from("a.css")), ("defer", true.into())]);
        assert_eq!(value.text_field("href"), Some("a.css"));
        assert_eq!(value.text_field("media"), None);
        assert!(value.flag("defer"));
        assert!(!value.flag("async"));
        assert_eq!(Value::from("plain").field("href"), None);
    }

    #[test]
    fn test_record_keeps_insertion_order() {
        let value = Value::record([("type", "image/png"), ("href", "/i.png"), ("sizes", "32x32")]);
        let keys: Vec<&str> = value
            .as_record()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, vec!["type", "href", "sizes"]);
        assert_eq!(value.to_string(), "image/png, /i.png, 32x32");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::from("Home").to_string(), "Home");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_string(),
            "a, b"
        );
        assert_eq!(Value::from(false).to_string(), "");
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            items: Vec<Value>,
        }

        let parsed: Wrapper = toml::from_str(
            r#"
items = ["plain", true, { href = "x.css", media = "print" }]
"#,
        )
        .unwrap();

        assert_eq!(parsed.items[0], Value::from("plain"));
        assert_eq!(parsed.items[1], Value::from(true));
        assert_eq!(parsed.items[2].text_field("media"), Some("print"));
    }

    #[test]
    fn test_deserialize_keeps_field_order() {
        let parsed: Record = toml::from_str(
            r#"
type = "image/png"
href = "/i.png"
sizes = "32x32"
"#,
        )
        .unwrap();
        let keys: Vec<&String> = parsed.keys().collect();
        assert_eq!(keys, vec!["type", "href", "sizes"]);
    }
}
