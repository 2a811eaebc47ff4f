//! Field values and the comparison rules used for dirty tracking.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Reference to a file picked through a file input.
///
/// The core never reads file contents; it only carries what the
/// rendering layer reports about the selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    /// File name as reported by the input
    pub name: String,
    /// Size in bytes
    #[serde(default)]
    pub size: u64,
    /// MIME type, when known
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
}

impl FileRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            mime: None,
        }
    }
}

/// Value held by a field.
///
/// Plain inputs hold `Text`, single checkboxes hold `Bool`, group fields
/// (radio groups, checkbox groups, selects) hold `List`, and file inputs
/// hold `Files`.
///
/// Deserialization accepts any JSON scalar: numbers are carried as their
/// decimal string form, arrays of strings become `List` and arrays of
/// objects become `Files`.
///
/// # Example
///
/// ```rust
/// use formstate::core::FieldValue;
///
/// let initial = FieldValue::from(vec!["car", "moto"]);
/// let current = FieldValue::from(vec!["moto", "car"]);
///
/// // Sequences compare as sets
/// assert!(!current.differs_from(&initial));
/// assert!(FieldValue::from(true).differs_from(&FieldValue::from(false)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, try_from = "Value")]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    List(Vec<String>),
    Files(Vec<FileRef>),
}

impl Default for FieldValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl FieldValue {
    /// Boolean view of the value, for checkbox-style fields.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether `key` is selected by this value.
    ///
    /// A `Text` value selects the single key equal to it.
    pub fn contains(&self, key: &str) -> bool {
        match self {
            Self::List(items) => items.iter().any(|item| item == key),
            Self::Text(s) => s == key,
            Self::Bool(_) | Self::Files(_) => false,
        }
    }

    /// Wrap a scalar string into a one-element sequence.
    ///
    /// Group fields are always sequence-valued. The empty string selects
    /// nothing and becomes the empty sequence; every other variant is
    /// returned unchanged.
    pub fn into_sequence(self) -> Self {
        match self {
            Self::Text(s) if s.is_empty() => Self::List(Vec::new()),
            Self::Text(s) => Self::List(vec![s]),
            other => other,
        }
    }

    /// Flag a checkbox-style field mirrors from its value.
    ///
    /// Text and sequences are set when non-empty.
    pub fn as_flag(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
            Self::Files(files) => !files.is_empty(),
        }
    }

    /// Dirty rule: sequences compare order-independently, everything else
    /// by direct inequality.
    pub fn differs_from(&self, initial: &FieldValue) -> bool {
        match (self, initial) {
            (Self::List(current), Self::List(initial)) => !same_members(current, initial),
            (current, initial) => current != initial,
        }
    }
}

fn same_members(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a: Vec<&String> = a.iter().collect();
    let mut b: Vec<&String> = b.iter().collect();
    a.sort();
    b.sort();
    a == b
}

impl TryFrom<Value> for FieldValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bool(b) => Ok(Self::Bool(b)),
            Value::String(s) => Ok(Self::Text(s)),
            Value::Number(n) => Ok(Self::Text(n.to_string())),
            Value::Array(items) => {
                if items.iter().any(Value::is_object) {
                    serde_json::from_value(Value::Array(items))
                        .map(Self::Files)
                        .map_err(|e| format!("invalid file list: {e}"))
                } else {
                    items
                        .into_iter()
                        .map(|item| match item {
                            Value::String(s) => Ok(s),
                            Value::Number(n) => Ok(n.to_string()),
                            other => Err(format!("unsupported sequence item: {other}")),
                        })
                        .collect::<Result<Vec<_>, _>>()
                        .map(Self::List)
                }
            }
            Value::Null => Err("null is not a field value".to_string()),
            Value::Object(_) => Err("an object is not a field value".to_string()),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        Self::List(items.into_iter().map(str::to_string).collect())
    }
}

impl From<Vec<FileRef>> for FieldValue {
    fn from(files: Vec<FileRef>) -> Self {
        Self::Files(files)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sequences_compare_as_sets() {
        let a = FieldValue::from(vec!["a", "b", "c"]);
        let b = FieldValue::from(vec!["c", "a", "b"]);
        assert!(!a.differs_from(&b));
        assert!(a.differs_from(&FieldValue::from(vec!["a", "b"])));
    }

    #[test]
    fn duplicate_members_are_not_collapsed() {
        let a = FieldValue::from(vec!["a", "a"]);
        let b = FieldValue::from(vec!["a", "b"]);
        assert!(a.differs_from(&b));
    }

    #[test]
    fn booleans_compare_directly() {
        assert!(FieldValue::from(true).differs_from(&FieldValue::from(false)));
        assert!(!FieldValue::from(false).differs_from(&FieldValue::from(false)));
    }

    #[test]
    fn text_is_order_sensitive() {
        assert!(FieldValue::from("ab").differs_from(&FieldValue::from("ba")));
        assert!(!FieldValue::from("ab").differs_from(&FieldValue::from("ab")));
    }

    #[test]
    fn mismatched_shapes_are_dirty() {
        let text = FieldValue::from("red");
        let list = FieldValue::from(vec!["red"]);
        assert!(text.differs_from(&list));
    }

    #[test]
    fn contains_matches_text_and_lists() {
        assert!(FieldValue::from(vec!["x", "y"]).contains("y"));
        assert!(FieldValue::from("x").contains("x"));
        assert!(!FieldValue::from("xy").contains("x"));
        assert!(!FieldValue::from(true).contains("true"));
    }

    #[test]
    fn into_sequence_wraps_only_text() {
        assert_eq!(
            FieldValue::from("male").into_sequence(),
            FieldValue::from(vec!["male"])
        );
        assert_eq!(
            FieldValue::from(true).into_sequence(),
            FieldValue::from(true)
        );
    }

    #[test]
    fn empty_text_becomes_empty_sequence() {
        assert_eq!(FieldValue::default().into_sequence(), FieldValue::List(vec![]));
    }

    #[test]
    fn flags_follow_value_emptiness() {
        assert!(FieldValue::from(true).as_flag());
        assert!(!FieldValue::from(false).as_flag());
        assert!(FieldValue::from("yes").as_flag());
        assert!(!FieldValue::from("").as_flag());
        assert!(!FieldValue::List(vec![]).as_flag());
    }

    #[test]
    fn deserializes_json_scalars() {
        let value: FieldValue = serde_json::from_value(json!(42)).unwrap();
        assert_eq!(value, FieldValue::from("42"));

        let value: FieldValue = serde_json::from_value(json!(["a", 1])).unwrap();
        assert_eq!(value, FieldValue::from(vec!["a", "1"]));

        let value: FieldValue =
            serde_json::from_value(json!([{"name": "cv.pdf", "size": 10}])).unwrap();
        assert_eq!(
            value,
            FieldValue::Files(vec![FileRef {
                name: "cv.pdf".to_string(),
                size: 10,
                mime: None,
            }])
        );
    }

    #[test]
    fn rejects_objects() {
        let result: Result<FieldValue, _> = serde_json::from_value(json!({"a": 1}));
        assert!(result.is_err());
    }

    #[test]
    fn empty_array_is_an_empty_list() {
        let value: FieldValue = serde_json::from_value(json!([])).unwrap();
        assert_eq!(value, FieldValue::List(vec![]));
    }
}
