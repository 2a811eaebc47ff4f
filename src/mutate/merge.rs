//! Merging patches into fields.

use crate::core::{Field, FieldPatch, CORE_KEYS};
use serde_json::{Map, Value};
use tracing::trace;

/// Merge `patch` into a copy of `field`.
///
/// Sequences are replaced, never concatenated. Option patches update the
/// option with the same key; keys the group does not have are dropped.
pub(crate) fn merge_patch(field: &Field, patch: &FieldPatch) -> Field {
    let mut merged = field.clone();

    if let Some(value) = &patch.value {
        merged.value = value.clone();
    }
    if let Some(checked) = patch.checked {
        merged.checked = Some(checked);
    }
    if let Some(errors) = &patch.errors {
        merged.errors = errors.clone();
    }
    if let Some(active) = patch.active {
        merged.active = Some(active);
    }

    if let Some(option_patches) = &patch.fields {
        match merged.fields.as_mut() {
            Some(options) => {
                for (key, option_patch) in option_patches {
                    let Some(option) = options.get_mut(key) else {
                        trace!(option = %key, "dropping patch for unknown option");
                        continue;
                    };
                    if let Some(checked) = option_patch.checked {
                        option.checked = checked;
                    }
                    merge_attrs(&mut option.attrs, &option_patch.attrs);
                }
            }
            None => trace!("dropping option patches for a field without options"),
        }
    }

    merge_attrs(&mut merged.attrs, &patch.attrs);
    merged
}

/// Deep-merge JSON attributes: objects merge key by key, anything else
/// (arrays included) replaces the existing value.
pub(crate) fn merge_attrs(target: &mut Map<String, Value>, incoming: &Map<String, Value>) {
    for (key, value) in incoming {
        if CORE_KEYS.contains(&key.as_str()) {
            continue;
        }
        match target.get_mut(key) {
            Some(existing) => merge_json(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

fn merge_json(target: &mut Value, incoming: &Value) {
    match (target, incoming) {
        (Value::Object(target), Value::Object(incoming)) => {
            for (key, value) in incoming {
                match target.get_mut(key) {
                    Some(existing) => merge_json(existing, value),
                    None => {
                        target.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        (target, incoming) => *target = incoming.clone(),
    }
}
