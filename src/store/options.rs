//! Mount requests.

use crate::core::{Changes, FieldTree};
use crate::cycle::{Hooks, RawEvent, ValidationErrors};
use crate::normalize::{RawField, Schema};

/// Everything needed to mount a form, assembled with a fluent API.
///
/// `id` and `schema` are required; they are checked when the form is
/// mounted, together with every other configuration problem.
#[derive(Clone, Debug, Default)]
pub struct FormOptions {
    pub(crate) id: String,
    pub(crate) schema: Option<Schema>,
    pub(crate) hooks: Hooks,
}

impl FormOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Set the whole schema (required).
    pub fn schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }

    /// Add one schema entry.
    pub fn field(mut self, name: impl Into<String>, raw: impl Into<RawField>) -> Self {
        self.schema
            .get_or_insert_with(Schema::new)
            .insert(name.into(), raw.into());
        self
    }

    pub fn hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn on_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FieldTree, Option<&RawEvent>) -> Option<Changes> + Send + Sync + 'static,
    {
        self.hooks = self.hooks.on_change(hook);
        self
    }

    pub fn validate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FieldTree) -> ValidationErrors + Send + Sync + 'static,
    {
        self.hooks = self.hooks.validate(hook);
        self
    }
}
