//! Raw schema shapes accepted by the normalizer.

use crate::core::FieldValue;
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Option set of a group field as written in a schema.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OptionSet {
    /// Bare option keys, each without extra attributes
    Keys(Vec<String>),
    /// Option keys with their pass-through attributes
    Keyed(IndexMap<String, Map<String, Value>>),
}

impl OptionSet {
    pub(crate) fn into_map(self) -> IndexMap<String, Map<String, Value>> {
        match self {
            Self::Keys(keys) => keys.into_iter().map(|key| (key, Map::new())).collect(),
            Self::Keyed(options) => options,
        }
    }
}

/// Explicit field description.
///
/// Every property is optional; missing values are filled in by the
/// normalizer. Unknown properties are kept as pass-through attributes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(default)]
    pub value: Option<FieldValue>,
    #[serde(default)]
    pub initial_value: Option<FieldValue>,
    #[serde(default)]
    pub checked: Option<bool>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
    #[serde(default)]
    pub fields: Option<OptionSet>,
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

impl FieldSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(mut self, value: impl Into<FieldValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn initial_value(mut self, value: impl Into<FieldValue>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Turn the field into a group with the given option keys.
    pub fn options<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.fields = Some(OptionSet::Keys(keys.into_iter().map(Into::into).collect()));
        self
    }

    /// Turn the field into a group with keyed options and their attributes.
    pub fn keyed_options(mut self, options: IndexMap<String, Map<String, Value>>) -> Self {
        self.fields = Some(OptionSet::Keyed(options));
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: Value) -> Self {
        self.attrs.insert(name.into(), value);
        self
    }
}

/// Any shape a schema entry may take.
///
/// Resolved once, by the normalizer, into a canonical field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawField {
    Bool(bool),
    Value(FieldValue),
    Spec(FieldSpec),
}

impl From<bool> for RawField {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<&str> for RawField {
    fn from(s: &str) -> Self {
        Self::Value(FieldValue::from(s))
    }
}

impl From<String> for RawField {
    fn from(s: String) -> Self {
        Self::Value(FieldValue::from(s))
    }
}

impl From<FieldValue> for RawField {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Bool(b) => Self::Bool(b),
            other => Self::Value(other),
        }
    }
}

impl From<FieldSpec> for RawField {
    fn from(spec: FieldSpec) -> Self {
        Self::Spec(spec)
    }
}
