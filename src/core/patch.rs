//! Partial field updates.
//!
//! A patch names only the properties it changes. Patches come from three
//! places: the event adapter, the on-change hook and the error splice. All
//! of them are applied by the same mutator.

use super::value::FieldValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Changes keyed by field name.
pub type Changes = IndexMap<String, FieldPatch>;

/// Partial update of a single option inside a group field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Partial update of a field.
///
/// `errors` distinguishes "leave untouched" (`None`) from "clear"
/// (`Some(None)`). `initialValue` and `dirty` are never patchable.
///
/// # Example
///
/// ```rust
/// use formstate::core::FieldPatch;
/// use serde_json::json;
///
/// let patch = FieldPatch::value("mark").attr("disabled", json!(false));
/// assert!(patch.value.is_some());
/// assert!(patch.is_value_driven());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub errors: Option<Option<Vec<String>>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<IndexMap<String, OptionPatch>>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// Maps an explicit JSON `null` to `Some(None)` instead of `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl FieldPatch {
    pub fn value(value: impl Into<FieldValue>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn checked(checked: bool) -> Self {
        Self {
            checked: Some(checked),
            ..Self::default()
        }
    }

    /// Set (`Some`) or clear (`None`) the error list.
    pub fn errors(errors: Option<Vec<String>>) -> Self {
        Self {
            errors: Some(errors),
            ..Self::default()
        }
    }

    pub fn active(active: bool) -> Self {
        Self {
            active: Some(active),
            ..Self::default()
        }
    }

    /// Toggle a single option of a group field.
    pub fn option(key: impl Into<String>, checked: bool) -> Self {
        Self::default().with_option(key, checked)
    }

    pub fn with_option(mut self, key: impl Into<String>, checked: bool) -> Self {
        self.fields.get_or_insert_with(IndexMap::new).insert(
            key.into(),
            OptionPatch {
                checked: Some(checked),
                attrs: Map::new(),
            },
        );
        self
    }

    /// Set a pass-through attribute.
    pub fn attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }

    /// True when the patch drives the value directly.
    pub fn is_value_driven(&self) -> bool {
        self.value.is_some()
    }

    /// True when the patch drives the value through checked flags.
    pub fn is_checked_driven(&self) -> bool {
        self.value.is_none() && (self.checked.is_some() || self.fields.is_some())
    }
}
