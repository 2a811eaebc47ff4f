//! Canonical field and option records.

use super::value::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

/// One selectable member of a group field.
///
/// The option's key (its value string) lives in the owning map; the record
/// only carries the `checked` flag and whatever attributes the schema gave it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldOption {
    pub(crate) checked: bool,
    #[serde(flatten)]
    pub(crate) attrs: Map<String, Value>,
}

impl FieldOption {
    pub fn checked(&self) -> bool {
        self.checked
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn attrs(&self) -> &Map<String, Value> {
        &self.attrs
    }
}

/// Canonical state of a single form field.
///
/// Fields are only created by normalization. Afterwards every change goes
/// through the mutator, which returns new fields instead of editing these,
/// so `initial_value` is fixed for the lifetime of the field.
///
/// Attributes the core does not interpret (`disabled`, `label`, `widget`,
/// ...) are kept in an open attribute bag and serialized inline.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub(crate) value: FieldValue,
    pub(crate) initial_value: FieldValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) checked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) dirty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) errors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) fields: Option<IndexMap<String, FieldOption>>,
    #[serde(flatten)]
    pub(crate) attrs: Map<String, Value>,
}

impl Field {
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    pub fn initial_value(&self) -> &FieldValue {
        &self.initial_value
    }

    /// Checked flag, present only on boolean fields.
    pub fn checked(&self) -> Option<bool> {
        self.checked
    }

    /// Whether the value differs from the initial value.
    ///
    /// Fields that were never edited report `false`.
    pub fn is_dirty(&self) -> bool {
        self.dirty.unwrap_or(false)
    }

    /// Raw dirty flag; `None` until the first derived mutation.
    pub fn dirty(&self) -> Option<bool> {
        self.dirty
    }

    pub fn errors(&self) -> Option<&[String]> {
        self.errors.as_deref()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|errors| !errors.is_empty())
    }

    pub fn is_active(&self) -> bool {
        self.active.unwrap_or(false)
    }

    /// Option set of a group field.
    pub fn options(&self) -> Option<&IndexMap<String, FieldOption>> {
        self.fields.as_ref()
    }

    pub fn option(&self, key: &str) -> Option<&FieldOption> {
        self.fields.as_ref().and_then(|options| options.get(key))
    }

    pub fn is_group(&self) -> bool {
        self.fields.is_some()
    }

    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attrs.get(name)
    }

    pub fn attrs(&self) -> &Map<String, Value> {
        &self.attrs
    }

    /// Errors a renderer should display for this field.
    ///
    /// The field's own errors come first, followed by `extra` errors
    /// supplied by the caller. Empty messages are skipped. With
    /// `errors_on_dirty_only` set, nothing is shown until the user has
    /// changed the field.
    pub fn visible_errors<'a>(
        &'a self,
        errors_on_dirty_only: bool,
        extra: &'a [String],
    ) -> Vec<&'a str> {
        if errors_on_dirty_only && !self.is_dirty() {
            return Vec::new();
        }
        self.errors
            .iter()
            .flatten()
            .chain(extra)
            .map(String::as_str)
            .filter(|message| !message.is_empty())
            .collect()
    }
}
