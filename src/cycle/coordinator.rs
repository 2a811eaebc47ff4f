//! Update cycles: edit, on-change hook, validation.

use super::event::{event_to_change, RawEvent};
use super::hooks::{ErrorEntry, Hooks, ValidationErrors};
use crate::core::{Changes, FieldPatch, FieldTree};
use crate::mutate::apply_change;
use tracing::{debug, trace};

/// Result of one update cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct CycleOutcome {
    /// Tree after edit, hook changes and error splice
    pub tree: FieldTree,
    /// Whether any entry carries a non-empty error list
    pub has_errors: bool,
    /// Whether the on-change hook returned changes
    pub hook_changes: bool,
}

/// Run a full cycle for a raw input event.
///
/// # Example
///
/// ```rust
/// use formstate::config::FormConfig;
/// use formstate::cycle::{handle_event, Hooks, RawEvent, ValidationErrors};
/// use formstate::normalize::normalize_json;
/// use serde_json::json;
///
/// let tree = normalize_json(json!({"username": "john"}), &FormConfig::default()).unwrap();
/// let hooks = Hooks::new().validate(|tree| {
///     let mut errors = ValidationErrors::new();
///     if tree.get("username").and_then(|f| f.value().as_text()) == Some("") {
///         errors.insert("username".to_string(), "Required".into());
///     }
///     errors
/// });
///
/// let outcome = handle_event(&tree, &RawEvent::text("username", ""), &hooks);
/// assert!(outcome.has_errors);
/// assert!(outcome.tree.get("username").unwrap().is_dirty());
/// ```
pub fn handle_event(tree: &FieldTree, event: &RawEvent, hooks: &Hooks) -> CycleOutcome {
    debug!(field = %event.name, kind = %event.kind, "handling input event");
    run_cycle(tree, &event_to_change(event), Some(event), hooks)
}

/// Restore every field to its initial value, then run hooks as usual.
///
/// The on-change hook is called without an event.
pub fn reset(tree: &FieldTree, hooks: &Hooks) -> CycleOutcome {
    debug!(fields = tree.len(), "resetting form");
    let changes: Changes = tree
        .iter()
        .map(|(name, field)| {
            (
                name.to_string(),
                FieldPatch::value(field.initial_value().clone()),
            )
        })
        .collect();
    run_cycle(tree, &changes, None, hooks)
}

/// Set the focus flag of one field. Hooks are not run.
pub fn handle_focus_change(tree: &FieldTree, name: &str, focused: bool) -> FieldTree {
    trace!(field = %name, focused, "focus change");
    let changes = Changes::from([(name.to_string(), FieldPatch::active(focused))]);
    apply_change(tree, &changes, false)
}

/// Apply `changes`, then the on-change hook, then validation.
pub fn run_cycle(
    tree: &FieldTree,
    changes: &Changes,
    event: Option<&RawEvent>,
    hooks: &Hooks,
) -> CycleOutcome {
    let edited = apply_change(tree, changes, true);
    let (changed, hook_changes) = apply_additional_changes(&edited, event, hooks);
    let (tree, has_errors) = perform_validation(&changed, hooks);
    debug!(has_errors, hook_changes, "cycle complete");
    CycleOutcome {
        tree,
        has_errors,
        hook_changes,
    }
}

/// Run the on-change hook against `tree` and apply whatever it returns.
///
/// Returns the new tree and whether the hook produced any changes.
pub fn apply_additional_changes(
    tree: &FieldTree,
    event: Option<&RawEvent>,
    hooks: &Hooks,
) -> (FieldTree, bool) {
    let Some(hook) = hooks.on_change_hook() else {
        return (tree.clone(), false);
    };
    match hook.call(tree, event) {
        Some(changes) if !changes.is_empty() => {
            trace!(count = changes.len(), "applying on-change hook changes");
            (apply_change(tree, &changes, true), true)
        }
        _ => (tree.clone(), false),
    }
}

/// Run the validate hook and splice its errors into the tree.
///
/// Without a validate hook the tree is returned as is. Either way the
/// second element tells whether the resulting tree has errors.
pub fn perform_validation(tree: &FieldTree, hooks: &Hooks) -> (FieldTree, bool) {
    let tree = match hooks.validate_hook() {
        Some(hook) => splice_errors(tree, hook.call(tree)),
        None => tree.clone(),
    };
    let has_errors = tree.has_errors();
    (tree, has_errors)
}

/// Write reported errors onto their entries.
///
/// Entries with a report get it; entries without a report that currently
/// hold errors are cleared; all others are left alone. Reports for unknown
/// keys are dropped.
pub fn splice_errors(tree: &FieldTree, mut reported: ValidationErrors) -> FieldTree {
    let mut changes = Changes::new();
    for key in tree.keys() {
        let errors = reported.shift_remove(key).and_then(ErrorEntry::into_errors);
        if errors.is_some() || tree.errors_of(key).is_some() {
            changes.insert(key.to_string(), FieldPatch::errors(errors));
        }
    }
    for key in reported.keys() {
        trace!(field = %key, "dropping errors for unknown field");
    }
    apply_change(tree, &changes, false)
}
