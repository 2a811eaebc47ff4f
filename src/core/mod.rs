//! Canonical form-state data model.
//!
//! This module contains the value types every other module works on:
//! - Field values and their dirty comparison
//! - Canonical fields and group options
//! - The persistent field tree
//! - Partial updates (patches) keyed by field name
//!
//! Nothing in here performs a state transition; normalization, mutation
//! and update cycles live in their own modules.

mod field;
mod patch;
mod tree;
mod value;

pub use field::{Field, FieldOption};
pub use patch::{Changes, FieldPatch, OptionPatch};
pub use tree::FieldTree;
pub use value::{FieldValue, FileRef};

/// Property names with a meaning to the core.
///
/// They never travel through the pass-through attribute bag.
pub(crate) const CORE_KEYS: [&str; 7] = [
    "value",
    "initialValue",
    "checked",
    "dirty",
    "errors",
    "active",
    "fields",
];
