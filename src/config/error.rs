//! Configuration errors.

use thiserror::Error;

/// Problems found while checking a form configuration or mount request.
///
/// These are caller bugs: they are reported at mount time and never
/// recovered from by the library.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Form id not specified. Provide a non-empty id when mounting a form")]
    MissingId,

    #[error("Form fields not specified. Call .schema(fields) before mounting form '{id}'")]
    MissingSchema { id: String },

    #[error("Non-field errors key must not be empty")]
    EmptyErrorsKey,

    #[error("Action type for '{action}' must not be empty")]
    EmptyActionType { action: String },

    #[error("Action type '{tag}' is used by both '{first}' and '{second}'")]
    DuplicateActionType {
        tag: String,
        first: String,
        second: String,
    },

    #[error("Field '{field}' collides with the reserved non-field errors key")]
    ReservedKeyCollision { field: String },

    #[error("Form '{id}' is already mounted")]
    AlreadyMounted { id: String },
}
