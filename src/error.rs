//! Top-level error type.

use crate::config::ConfigError;
use thiserror::Error;

/// Errors returned by store operations and schema loading.
///
/// Field validation problems are not errors in this sense: they are data,
/// stored on the fields themselves.
#[derive(Debug, Error)]
pub enum FormError {
    #[error("Invalid form configuration: {}", join(.0))]
    InvalidConfig(Vec<ConfigError>),

    #[error("Form '{0}' is not mounted")]
    UnknownForm(String),

    #[error("Schema deserialization failed: {0}")]
    Schema(#[from] serde_json::Error),
}

fn join(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
