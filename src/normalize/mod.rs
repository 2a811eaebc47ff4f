//! Schema normalization.
//!
//! Converts a raw schema (scalars, booleans, explicit descriptions, option
//! groups) into the canonical field tree. Every shape is resolved here,
//! once, so the mutator only ever sees canonical fields.
//!
//! # Example
//!
//! ```rust
//! use formstate::config::FormConfig;
//! use formstate::core::FieldValue;
//! use formstate::normalize::normalize_json;
//! use serde_json::json;
//!
//! let tree = normalize_json(
//!     json!({
//!         "username": "john",
//!         "sex": {"fields": ["male", "female"], "value": "male"},
//!     }),
//!     &FormConfig::default(),
//! )
//! .unwrap();
//!
//! let sex = tree.get("sex").unwrap();
//! assert_eq!(sex.value(), &FieldValue::from(vec!["male"]));
//! assert!(sex.option("male").unwrap().checked());
//! assert!(!sex.option("female").unwrap().checked());
//! ```

mod schema;

pub use schema::{FieldSpec, OptionSet, RawField};

use crate::config::FormConfig;
use crate::core::{Field, FieldOption, FieldTree, CORE_KEYS};
use crate::error::FormError;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::warn;

/// Raw schema keyed by field name.
pub type Schema = IndexMap<String, RawField>;

/// Build the canonical tree for a schema.
///
/// A schema entry named like the reserved non-field errors key is skipped;
/// the reserved entry always starts as `{errors: null}`.
pub fn normalize(schema: &Schema, config: &FormConfig) -> FieldTree {
    let mut tree = FieldTree::new(&config.non_field_errors_key);
    for (name, raw) in schema {
        if *name == config.non_field_errors_key {
            warn!(field = %name, "schema entry shadows the non-field errors key, skipping");
            continue;
        }
        tree.insert(name.clone(), normalize_field(raw));
    }
    tree
}

/// Deserialize a JSON schema and normalize it.
pub fn normalize_json(schema: Value, config: &FormConfig) -> Result<FieldTree, FormError> {
    let schema: Schema = serde_json::from_value(schema)?;
    Ok(normalize(&schema, config))
}

/// Resolve one schema entry into a canonical field.
pub fn normalize_field(raw: &RawField) -> Field {
    let spec = match raw {
        RawField::Bool(b) => FieldSpec {
            checked: Some(*b),
            ..FieldSpec::new().value(*b)
        },
        RawField::Value(value) => FieldSpec::new().value(value.clone()),
        RawField::Spec(spec) => spec.clone(),
    };
    let FieldSpec {
        value,
        initial_value,
        checked,
        active,
        errors,
        fields,
        attrs,
    } = spec;

    let initial_value = initial_value.or_else(|| value.clone()).unwrap_or_default();
    let value = value.unwrap_or_else(|| initial_value.clone());

    match fields {
        Some(options) => {
            let value = value.into_sequence();
            let initial_value = initial_value.into_sequence();
            let options = options
                .into_map()
                .into_iter()
                .map(|(key, attrs)| {
                    let option = FieldOption {
                        checked: value.contains(&key),
                        attrs: without_core_keys(attrs),
                    };
                    (key, option)
                })
                .collect();
            Field {
                value,
                initial_value,
                checked,
                dirty: None,
                errors,
                active,
                fields: Some(options),
                attrs: without_core_keys(attrs),
            }
        }
        None => Field {
            checked: value.as_bool().or(checked),
            value,
            initial_value,
            dirty: None,
            errors,
            active,
            fields: None,
            attrs: without_core_keys(attrs),
        },
    }
}

fn without_core_keys(mut attrs: Map<String, Value>) -> Map<String, Value> {
    for key in CORE_KEYS {
        attrs.remove(key);
    }
    attrs
}
