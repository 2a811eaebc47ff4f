//! Derived field state: checked flags, group values and the dirty flag.

use crate::core::{Field, FieldPatch, FieldValue};

/// Re-derive `field` after `patch` was merged into it.
///
/// A value-driven patch pushes the value down into the checked flags; a
/// checked-driven patch pulls the value up from them. The dirty flag is
/// recomputed in every case.
pub(crate) fn derive(field: &mut Field, patch: &FieldPatch) {
    if patch.is_value_driven() {
        if let Some(options) = field.fields.as_mut() {
            field.value = std::mem::take(&mut field.value).into_sequence();
            for (key, option) in options.iter_mut() {
                option.checked = field.value.contains(key);
            }
        } else if field.checked.is_some() {
            field.checked = Some(field.value.as_flag());
        }
    } else if patch.is_checked_driven() {
        if let Some(options) = &field.fields {
            field.value = FieldValue::List(
                options
                    .iter()
                    .filter(|(_, option)| option.checked)
                    .map(|(key, _)| key.clone())
                    .collect(),
            );
        } else if let Some(checked) = patch.checked {
            field.value = FieldValue::Bool(checked);
        }
    }

    field.dirty = Some(field.value.differs_from(&field.initial_value));
}
