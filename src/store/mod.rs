//! Registry of mounted forms.
//!
//! The store is the imperative shell around the pure cycle functions: it
//! owns the current tree of every mounted form, feeds events through the
//! cycle and swaps in the resulting tree. Each operation is labelled with
//! its configured action tag in the logs.
//!
//! # Example
//!
//! ```rust
//! use formstate::cycle::{RawEvent, ValidationErrors};
//! use formstate::store::{FormOptions, FormStore};
//!
//! let mut store = FormStore::default();
//! store
//!     .mount(
//!         FormOptions::new("signup")
//!             .field("username", "")
//!             .field("agree", false)
//!             .validate(|tree| {
//!                 let mut errors = ValidationErrors::new();
//!                 if tree.get("agree").and_then(|f| f.value().as_bool()) != Some(true) {
//!                     errors.insert("agree".to_string(), "Please accept the terms".into());
//!                 }
//!                 errors
//!             }),
//!     )
//!     .unwrap();
//! assert!(store.get("signup").unwrap().has_errors());
//!
//! let form = store
//!     .change("signup", &RawEvent::checkbox("agree", "false", true))
//!     .unwrap();
//! assert!(!form.has_errors());
//! ```

mod action;
mod instance;
mod options;

pub use action::Action;
pub use instance::{FormInstance, FormMetadata, FormSnapshot};
pub use options::FormOptions;

use crate::config::{into_result, ConfigError, FormConfig};
use crate::core::Changes;
use crate::cycle::{self, FocusKind, RawEvent};
use crate::error::FormError;
use crate::normalize::normalize;
use indexmap::IndexMap;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// Mounted forms keyed by form id.
#[derive(Debug)]
pub struct FormStore {
    config: FormConfig,
    forms: IndexMap<String, FormInstance>,
}

impl Default for FormStore {
    fn default() -> Self {
        Self {
            config: FormConfig::default(),
            forms: IndexMap::new(),
        }
    }
}

impl FormStore {
    /// Create a store after checking its configuration.
    pub fn new(config: FormConfig) -> Result<Self, FormError> {
        config.check()?;
        Ok(Self {
            config,
            forms: IndexMap::new(),
        })
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    pub fn get(&self, id: &str) -> Option<&FormInstance> {
        self.forms.get(id)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Mount a form: normalize its schema, then run the mount-time cycle
    /// (on-change hook without event, then validation).
    ///
    /// Every problem with the request is reported at once.
    pub fn mount(&mut self, options: FormOptions) -> Result<&FormInstance, FormError> {
        into_result(self.check_mount(&options))?;
        let FormOptions { id, schema, hooks } = options;
        let schema = schema.unwrap_or_default();

        let tree = normalize(&schema, &self.config);
        let outcome = cycle::run_cycle(&tree, &Changes::new(), None, &hooks);

        let mut form = FormInstance::new(id.clone(), tree, hooks);
        form.apply_outcome(outcome, Action::InitForm);
        form.mark_initialized();
        self.log(&id, Action::InitForm);

        Ok(self.forms.entry(id).or_insert(form))
    }

    /// Remove a form and hand back its final state.
    pub fn unmount(&mut self, id: &str) -> Result<FormInstance, FormError> {
        let form = self
            .forms
            .shift_remove(id)
            .ok_or_else(|| FormError::UnknownForm(id.to_string()))?;
        self.log(id, Action::DestroyForm);
        Ok(form)
    }

    /// Run a full cycle for an input event.
    pub fn change(&mut self, id: &str, event: &RawEvent) -> Result<&FormInstance, FormError> {
        let form = self.form_mut(id)?;
        let outcome = cycle::handle_event(form.fields(), event, form.hooks());
        let hook_changes = outcome.hook_changes;
        let validated = form.hooks().has_validate();
        form.apply_outcome(outcome, Action::EditFields);

        self.log(id, Action::EditFields);
        if hook_changes {
            self.log(id, Action::AdditionalChanges);
        }
        if validated {
            self.log(id, Action::SetErrors);
        }
        self.form(id)
    }

    /// Record focus or blur of a field. No hooks run.
    pub fn focus(
        &mut self,
        id: &str,
        name: &str,
        kind: FocusKind,
    ) -> Result<&FormInstance, FormError> {
        let form = self.form_mut(id)?;
        let tree = cycle::handle_focus_change(form.fields(), name, kind.is_focused());
        form.apply_tree(tree, Action::ChangeFocus);
        self.log(id, Action::ChangeFocus);
        self.form(id)
    }

    /// Restore initial values and rerun hooks.
    pub fn reset(&mut self, id: &str) -> Result<&FormInstance, FormError> {
        let form = self.form_mut(id)?;
        let outcome = cycle::reset(form.fields(), form.hooks());
        form.apply_outcome(outcome, Action::ResetForm);
        self.log(id, Action::ResetForm);
        self.form(id)
    }

    /// Snapshot of a form for a submit handler.
    pub fn submit(&self, id: &str) -> Result<FormSnapshot, FormError> {
        Ok(self.form(id)?.snapshot())
    }

    fn form(&self, id: &str) -> Result<&FormInstance, FormError> {
        self.forms
            .get(id)
            .ok_or_else(|| FormError::UnknownForm(id.to_string()))
    }

    fn form_mut(&mut self, id: &str) -> Result<&mut FormInstance, FormError> {
        self.forms
            .get_mut(id)
            .ok_or_else(|| FormError::UnknownForm(id.to_string()))
    }

    fn check_mount(&self, options: &FormOptions) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        if options.id.is_empty() {
            checks.push(Validation::fail(ConfigError::MissingId));
        } else if self.forms.contains_key(&options.id) {
            checks.push(Validation::fail(ConfigError::AlreadyMounted {
                id: options.id.clone(),
            }));
        }

        match &options.schema {
            None => checks.push(Validation::fail(ConfigError::MissingSchema {
                id: options.id.clone(),
            })),
            Some(schema) if schema.contains_key(&self.config.non_field_errors_key) => {
                checks.push(Validation::fail(ConfigError::ReservedKeyCollision {
                    field: self.config.non_field_errors_key.clone(),
                }));
            }
            Some(_) => {}
        }

        Validation::all_vec(checks).map(|_| ())
    }

    fn log(&self, id: &str, action: Action) {
        debug!(
            form = %id,
            action = action.tag(&self.config.action_types),
            "dispatched"
        );
    }
}
