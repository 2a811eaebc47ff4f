//! Persistent field tree.

use super::field::Field;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::iter;
use std::sync::Arc;

/// Mapping from field name to canonical field, plus the form-level error
/// entry stored under the reserved key.
///
/// Trees are persistent: fields sit behind `Arc`, and every mutation builds
/// a new tree that shares the fields it did not touch. Holding on to an old
/// tree is always safe, and [`FieldTree::same_field`] tells whether a field
/// was replaced between two trees without comparing contents.
///
/// # Example
///
/// ```rust
/// use formstate::config::FormConfig;
/// use formstate::core::{Changes, FieldPatch};
/// use formstate::mutate::apply_change;
/// use formstate::normalize::{normalize, Schema};
///
/// let mut schema = Schema::new();
/// schema.insert("username".to_string(), "john".into());
/// schema.insert("password".to_string(), "doe".into());
/// let tree = normalize(&schema, &FormConfig::default());
///
/// let changes = Changes::from([("username".to_string(), FieldPatch::value("mark"))]);
/// let next = apply_change(&tree, &changes, true);
///
/// assert!(!next.same_field(&tree, "username"));
/// assert!(next.same_field(&tree, "password"));
/// assert_eq!(tree.get("username").unwrap().value().as_text(), Some("john"));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct FieldTree {
    fields: IndexMap<String, Arc<Field>>,
    non_field_errors: Option<Vec<String>>,
    errors_key: Arc<str>,
}

impl FieldTree {
    pub(crate) fn new(errors_key: &str) -> Self {
        Self {
            fields: IndexMap::new(),
            non_field_errors: None,
            errors_key: Arc::from(errors_key),
        }
    }

    pub(crate) fn insert(&mut self, name: String, field: Field) {
        self.fields.insert(name, Arc::new(field));
    }

    /// Swap in a new version of an existing field. Unknown names are ignored.
    pub(crate) fn replace(&mut self, name: &str, field: Field) {
        if let Some(slot) = self.fields.get_mut(name) {
            *slot = Arc::new(field);
        }
    }

    pub(crate) fn set_non_field_errors(&mut self, errors: Option<Vec<String>>) {
        self.non_field_errors = errors;
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.get(name).map(Arc::as_ref)
    }

    /// Whether `name` is a field of this tree. The reserved key is not a field.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Field names in schema order, without the reserved key.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Every entry key: field names followed by the reserved key.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.names().chain(iter::once(self.errors_key.as_ref()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields
            .iter()
            .map(|(name, field)| (name.as_str(), field.as_ref()))
    }

    /// Number of fields, not counting the reserved entry.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Name of the reserved entry holding form-level errors.
    pub fn errors_key(&self) -> &str {
        &self.errors_key
    }

    /// Form-level errors, not attached to any field.
    pub fn non_field_errors(&self) -> Option<&[String]> {
        self.non_field_errors.as_deref()
    }

    /// Errors stored under any entry key, the reserved key included.
    pub fn errors_of(&self, key: &str) -> Option<&[String]> {
        if key == self.errors_key() {
            return self.non_field_errors();
        }
        self.get(key).and_then(Field::errors)
    }

    /// True when any entry carries a non-empty error list.
    pub fn has_errors(&self) -> bool {
        self.keys()
            .any(|key| self.errors_of(key).is_some_and(|errors| !errors.is_empty()))
    }

    /// True when both trees hold the very same field allocation for `name`.
    pub fn same_field(&self, other: &FieldTree, name: &str) -> bool {
        match (self.fields.get(name), other.fields.get(name)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[derive(serde::Serialize)]
struct NonFieldErrors<'a> {
    errors: Option<&'a [String]>,
}

impl Serialize for FieldTree {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 1))?;
        for (name, field) in &self.fields {
            map.serialize_entry(name, field.as_ref())?;
        }
        map.serialize_entry(
            self.errors_key.as_ref(),
            &NonFieldErrors {
                errors: self.non_field_errors(),
            },
        )?;
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FieldValue;
    use serde_json::{json, Map};

    fn field(value: &str) -> Field {
        Field {
            value: FieldValue::from(value),
            initial_value: FieldValue::from(value),
            checked: None,
            dirty: None,
            errors: None,
            active: None,
            fields: None,
            attrs: Map::new(),
        }
    }

    fn tree() -> FieldTree {
        let mut tree = FieldTree::new("nonFieldErrors");
        tree.insert("username".to_string(), field("john"));
        tree.insert("password".to_string(), field("doe"));
        tree
    }

    #[test]
    fn keys_end_with_reserved_entry() {
        let tree = tree();
        let keys: Vec<&str> = tree.keys().collect();
        assert_eq!(keys, vec!["username", "password", "nonFieldErrors"]);
    }

    #[test]
    fn reserved_key_is_not_a_field() {
        let tree = tree();
        assert!(!tree.contains("nonFieldErrors"));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn replace_ignores_unknown_names() {
        let mut tree = tree();
        tree.replace("email", field("x"));
        assert!(!tree.contains("email"));
    }

    #[test]
    fn clones_share_fields_until_replaced() {
        let original = tree();
        let mut next = original.clone();
        assert!(next.same_field(&original, "username"));

        next.replace("username", field("mark"));
        assert!(!next.same_field(&original, "username"));
        assert!(next.same_field(&original, "password"));
        assert_eq!(original.get("username").unwrap().value().as_text(), Some("john"));
    }

    #[test]
    fn non_field_errors_count_towards_has_errors() {
        let mut tree = tree();
        assert!(!tree.has_errors());

        tree.set_non_field_errors(Some(vec![]));
        assert!(!tree.has_errors());

        tree.set_non_field_errors(Some(vec!["No way".to_string()]));
        assert!(tree.has_errors());
        assert_eq!(tree.errors_of("nonFieldErrors"), Some(&["No way".to_string()][..]));
    }

    #[test]
    fn serializes_reserved_entry_last() {
        let json = serde_json::to_value(tree()).unwrap();
        assert_eq!(
            json,
            json!({
                "username": {"value": "john", "initialValue": "john"},
                "password": {"value": "doe", "initialValue": "doe"},
                "nonFieldErrors": {"errors": null}
            })
        );
    }
}
