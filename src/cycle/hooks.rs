//! Caller-supplied hooks run during an update cycle.

use super::event::RawEvent;
use crate::core::{Changes, FieldTree};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

type OnChangeFn = dyn Fn(&FieldTree, Option<&RawEvent>) -> Option<Changes> + Send + Sync;
type ValidateFn = dyn Fn(&FieldTree) -> ValidationErrors + Send + Sync;

/// Errors reported by a validate hook for one key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    One(String),
    Many(Vec<String>),
}

impl ErrorEntry {
    /// Error list to store on the field.
    ///
    /// An empty message counts as no error; an empty list is kept.
    pub fn into_errors(self) -> Option<Vec<String>> {
        match self {
            Self::One(message) if message.is_empty() => None,
            Self::One(message) => Some(vec![message]),
            Self::Many(messages) => Some(messages),
        }
    }
}

impl From<&str> for ErrorEntry {
    fn from(message: &str) -> Self {
        Self::One(message.to_string())
    }
}

impl From<String> for ErrorEntry {
    fn from(message: String) -> Self {
        Self::One(message)
    }
}

impl From<Vec<String>> for ErrorEntry {
    fn from(messages: Vec<String>) -> Self {
        Self::Many(messages)
    }
}

impl From<Vec<&str>> for ErrorEntry {
    fn from(messages: Vec<&str>) -> Self {
        Self::Many(messages.into_iter().map(str::to_string).collect())
    }
}

/// Output of a validate hook: errors keyed by field name (or by the
/// reserved non-field errors key). Keys without errors are simply absent.
pub type ValidationErrors = IndexMap<String, ErrorEntry>;

/// Hook run after every edit, returning extra changes to apply.
///
/// Receives the tree with the edit already applied, and the event that
/// caused it (`None` on mount and reset).
#[derive(Clone)]
pub struct OnChange(Arc<OnChangeFn>);

impl OnChange {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&FieldTree, Option<&RawEvent>) -> Option<Changes> + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn call(&self, tree: &FieldTree, event: Option<&RawEvent>) -> Option<Changes> {
        (self.0)(tree, event)
    }
}

/// Hook producing validation errors for a tree.
#[derive(Clone)]
pub struct Validate(Arc<ValidateFn>);

impl Validate {
    pub fn new<F>(hook: F) -> Self
    where
        F: Fn(&FieldTree) -> ValidationErrors + Send + Sync + 'static,
    {
        Self(Arc::new(hook))
    }

    pub fn call(&self, tree: &FieldTree) -> ValidationErrors {
        (self.0)(tree)
    }
}

/// Hooks configured for one form.
///
/// Hooks are plain closures. A panicking hook aborts the cycle and the
/// panic reaches the caller unchanged.
///
/// # Example
///
/// ```rust
/// use formstate::core::{Changes, FieldPatch};
/// use formstate::cycle::{Hooks, ValidationErrors};
/// use serde_json::json;
///
/// let hooks = Hooks::new()
///     .on_change(|tree, _event| {
///         let locked = tree.get("agree")?.value().as_bool() == Some(false);
///         Some(Changes::from([(
///             "submit".to_string(),
///             FieldPatch::default().attr("disabled", json!(locked)),
///         )]))
///     })
///     .validate(|tree| {
///         let mut errors = ValidationErrors::new();
///         if tree.get("username").and_then(|f| f.value().as_text()) == Some("") {
///             errors.insert("username".to_string(), "Required".into());
///         }
///         errors
///     });
///
/// assert!(hooks.has_on_change());
/// assert!(hooks.has_validate());
/// ```
#[derive(Clone, Default)]
pub struct Hooks {
    on_change: Option<OnChange>,
    validate: Option<Validate>,
}

impl Hooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_change<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FieldTree, Option<&RawEvent>) -> Option<Changes> + Send + Sync + 'static,
    {
        self.on_change = Some(OnChange::new(hook));
        self
    }

    pub fn validate<F>(mut self, hook: F) -> Self
    where
        F: Fn(&FieldTree) -> ValidationErrors + Send + Sync + 'static,
    {
        self.validate = Some(Validate::new(hook));
        self
    }

    pub fn has_on_change(&self) -> bool {
        self.on_change.is_some()
    }

    pub fn has_validate(&self) -> bool {
        self.validate.is_some()
    }

    pub(crate) fn on_change_hook(&self) -> Option<&OnChange> {
        self.on_change.as_ref()
    }

    pub(crate) fn validate_hook(&self) -> Option<&Validate> {
        self.validate.as_ref()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("on_change", &self.has_on_change())
            .field("validate", &self.has_validate())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message_is_wrapped() {
        assert_eq!(
            ErrorEntry::from("Too many").into_errors(),
            Some(vec!["Too many".to_string()])
        );
    }

    #[test]
    fn empty_message_is_no_error() {
        assert_eq!(ErrorEntry::from("").into_errors(), None);
    }

    #[test]
    fn lists_are_kept_as_given() {
        assert_eq!(
            ErrorEntry::from(vec!["No", "way"]).into_errors(),
            Some(vec!["No".to_string(), "way".to_string()])
        );
        assert_eq!(ErrorEntry::Many(vec![]).into_errors(), Some(vec![]));
    }

    #[test]
    fn entries_deserialize_from_json() {
        let errors: ValidationErrors =
            serde_json::from_str(r#"{"a": "bad", "b": ["x", "y"]}"#).unwrap();
        assert_eq!(errors["a"], ErrorEntry::from("bad"));
        assert_eq!(errors["b"], ErrorEntry::from(vec!["x", "y"]));
    }

    #[test]
    fn empty_hooks_report_nothing_configured() {
        let hooks = Hooks::new();
        assert!(!hooks.has_on_change());
        assert!(!hooks.has_validate());
        assert_eq!(format!("{hooks:?}"), "Hooks { on_change: false, validate: false }");
    }
}
