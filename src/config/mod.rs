//! Form configuration.
//!
//! Configuration is an explicit value handed to normalization and to the
//! form store, so independent stores with different settings can coexist.
//! Checks accumulate every problem instead of stopping at the first one.
//!
//! # Example
//!
//! ```rust
//! use formstate::config::{ActionTypes, FormConfig};
//!
//! let config = FormConfig {
//!     non_field_errors_key: "__all__".to_string(),
//!     action_types: ActionTypes::with_prefix("signup"),
//! };
//!
//! assert!(config.check().is_ok());
//! assert_eq!(config.action_types.edit_fields, "signup/EDIT_FIELDS");
//! ```

pub mod error;

pub use error::ConfigError;

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Reserved key used for form-level errors unless configured otherwise.
pub const DEFAULT_NON_FIELD_ERRORS_KEY: &str = "nonFieldErrors";

/// Prefix of the default action type tags.
pub const DEFAULT_ACTION_PREFIX: &str = "formstate";

/// Type tags attached to every store action.
///
/// The tags do not change what an action does; they label it in logs and
/// let a host application route actions from several stores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ActionTypes {
    pub init_form: String,
    pub destroy_form: String,
    pub edit_fields: String,
    pub change_focus: String,
    pub additional_changes: String,
    pub set_errors: String,
    pub reset_form: String,
}

impl ActionTypes {
    /// Tags of the form `<prefix>/INIT_FORM`, `<prefix>/EDIT_FIELDS`, ...
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            init_form: format!("{prefix}/INIT_FORM"),
            destroy_form: format!("{prefix}/DESTROY_FORM"),
            edit_fields: format!("{prefix}/EDIT_FIELDS"),
            change_focus: format!("{prefix}/CHANGE_FOCUS"),
            additional_changes: format!("{prefix}/ADDITIONAL_CHANGES"),
            set_errors: format!("{prefix}/SET_ERRORS"),
            reset_form: format!("{prefix}/RESET_FORM"),
        }
    }

    fn named(&self) -> [(&'static str, &str); 7] {
        [
            ("initForm", &self.init_form),
            ("destroyForm", &self.destroy_form),
            ("editFields", &self.edit_fields),
            ("changeFocus", &self.change_focus),
            ("additionalChanges", &self.additional_changes),
            ("setErrors", &self.set_errors),
            ("resetForm", &self.reset_form),
        ]
    }
}

impl Default for ActionTypes {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_ACTION_PREFIX)
    }
}

/// Settings shared by every form of a store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormConfig {
    /// Tree key holding form-level errors
    pub non_field_errors_key: String,
    /// Tags used to label store actions
    pub action_types: ActionTypes,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            non_field_errors_key: DEFAULT_NON_FIELD_ERRORS_KEY.to_string(),
            action_types: ActionTypes::default(),
        }
    }
}

impl FormConfig {
    /// Check the configuration, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigError>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigError>>> = Vec::new();

        checks.push(if self.non_field_errors_key.is_empty() {
            Validation::fail(ConfigError::EmptyErrorsKey)
        } else {
            Validation::success(())
        });

        let named = self.action_types.named();
        for (i, (action, tag)) in named.iter().enumerate() {
            if tag.is_empty() {
                checks.push(Validation::fail(ConfigError::EmptyActionType {
                    action: action.to_string(),
                }));
                continue;
            }
            if let Some((first, _)) = named[..i].iter().find(|(_, other)| other == tag) {
                checks.push(Validation::fail(ConfigError::DuplicateActionType {
                    tag: tag.to_string(),
                    first: first.to_string(),
                    second: action.to_string(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// `validate` folded into a `Result`.
    pub fn check(&self) -> Result<(), FormError> {
        into_result(self.validate())
    }
}

/// Collapse accumulated configuration problems into a `FormError`.
pub(crate) fn into_result(
    validation: Validation<(), NonEmptyVec<ConfigError>>,
) -> Result<(), FormError> {
    match validation {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(FormError::InvalidConfig(
            errors.iter().cloned().collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = FormConfig::default();
        assert!(config.validate().is_success());
        assert_eq!(config.non_field_errors_key, "nonFieldErrors");
        assert_eq!(config.action_types.init_form, "formstate/INIT_FORM");
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let mut config = FormConfig {
            non_field_errors_key: String::new(),
            ..FormConfig::default()
        };
        config.action_types.set_errors = String::new();
        config.action_types.reset_form = config.action_types.init_form.clone();

        match config.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::EmptyErrorsKey)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, ConfigError::EmptyActionType { action } if action == "setErrors")));
                assert!(errors.iter().any(|e| matches!(
                    e,
                    ConfigError::DuplicateActionType { first, second, .. }
                        if first == "initForm" && second == "resetForm"
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn check_reports_invalid_config() {
        let config = FormConfig {
            non_field_errors_key: String::new(),
            ..FormConfig::default()
        };

        match config.check() {
            Err(FormError::InvalidConfig(errors)) => {
                assert_eq!(errors, vec![ConfigError::EmptyErrorsKey]);
            }
            other => panic!("Expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: FormConfig =
            serde_json::from_str(r#"{"nonFieldErrorsKey": "__all__"}"#).unwrap();
        assert_eq!(config.non_field_errors_key, "__all__");
        assert_eq!(config.action_types, ActionTypes::default());
    }
}
