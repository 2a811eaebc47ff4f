//! Field mutation.
//!
//! The mutator is the single way a tree changes: it merges partial updates
//! into fields, optionally re-derives dependent state, and returns a new
//! tree. The input tree is never modified.

mod derive;
mod merge;

use crate::core::{Changes, FieldTree};
use tracing::trace;

/// Apply `changes` to `tree`, returning the new tree.
///
/// Keys missing from the tree are dropped, so hooks can mention optional
/// fields without creating them. Changes addressed to the reserved
/// non-field errors key only update its errors. With `recompute_derived`
/// set, checked flags, group values and the dirty flag are re-derived for
/// every patched field.
///
/// # Example
///
/// ```rust
/// use formstate::config::FormConfig;
/// use formstate::core::{Changes, FieldPatch, FieldValue};
/// use formstate::mutate::apply_change;
/// use formstate::normalize::normalize_json;
/// use serde_json::json;
///
/// let tree = normalize_json(json!({"agree": false}), &FormConfig::default()).unwrap();
/// let changes = Changes::from([
///     ("agree".to_string(), FieldPatch::value(true)),
///     ("missing".to_string(), FieldPatch::value("x")),
/// ]);
///
/// let next = apply_change(&tree, &changes, true);
/// let agree = next.get("agree").unwrap();
/// assert_eq!(agree.checked(), Some(true));
/// assert!(agree.is_dirty());
/// assert!(!next.contains("missing"));
/// ```
pub fn apply_change(tree: &FieldTree, changes: &Changes, recompute_derived: bool) -> FieldTree {
    let mut next = tree.clone();
    for (name, patch) in changes {
        if name == tree.errors_key() {
            if let Some(errors) = &patch.errors {
                next.set_non_field_errors(errors.clone());
            }
            continue;
        }
        let Some(current) = tree.get(name) else {
            trace!(field = %name, "dropping change for unknown field");
            continue;
        };
        let mut field = merge::merge_patch(current, patch);
        if recompute_derived {
            derive::derive(&mut field, patch);
            trace!(field = %name, dirty = ?field.dirty(), "derived field state");
        }
        next.replace(name, field);
    }
    next
}
