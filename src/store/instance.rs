//! Mounted form instances.

use super::action::Action;
use crate::core::FieldTree;
use crate::cycle::{CycleOutcome, Hooks};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Bookkeeping for a mounted form.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormMetadata {
    /// When the form was mounted
    pub mounted_at: DateTime<Utc>,
    /// When the form last changed
    pub updated_at: DateTime<Utc>,
    /// Completed cycles, the mount-time cycle included
    pub cycles: usize,
    /// Last action applied to the form
    #[serde(skip)]
    pub last_action: Option<Action>,
}

impl Default for FormMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            mounted_at: now,
            updated_at: now,
            cycles: 0,
            last_action: None,
        }
    }
}

/// Read-only view of a form, handed to submit handlers.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    pub id: String,
    pub fields: FieldTree,
    pub initialized: bool,
    pub has_errors: bool,
    pub metadata: FormMetadata,
}

/// One mounted form: its current tree, hooks and metadata.
#[derive(Clone, Debug)]
pub struct FormInstance {
    id: String,
    tree: FieldTree,
    hooks: Hooks,
    initialized: bool,
    has_errors: bool,
    metadata: FormMetadata,
}

impl FormInstance {
    pub(crate) fn new(id: String, tree: FieldTree, hooks: Hooks) -> Self {
        Self {
            id,
            tree,
            hooks,
            initialized: false,
            has_errors: false,
            metadata: FormMetadata::default(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn fields(&self) -> &FieldTree {
        &self.tree
    }

    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn has_errors(&self) -> bool {
        self.has_errors
    }

    pub fn metadata(&self) -> &FormMetadata {
        &self.metadata
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            id: self.id.clone(),
            fields: self.tree.clone(),
            initialized: self.initialized,
            has_errors: self.has_errors,
            metadata: self.metadata.clone(),
        }
    }

    pub(crate) fn apply_outcome(&mut self, outcome: CycleOutcome, action: Action) {
        self.tree = outcome.tree;
        self.has_errors = outcome.has_errors;
        self.metadata.cycles += 1;
        self.touch(action);
    }

    pub(crate) fn apply_tree(&mut self, tree: FieldTree, action: Action) {
        self.tree = tree;
        self.touch(action);
    }

    pub(crate) fn mark_initialized(&mut self) {
        self.initialized = true;
    }

    fn touch(&mut self, action: Action) {
        self.metadata.updated_at = Utc::now();
        self.metadata.last_action = Some(action);
    }
}
