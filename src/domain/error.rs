//! Domain error types.

use thiserror::Error;

/// Errors raised at the service boundary. Each variant is a terminal,
/// user-visible outcome for the request; nothing is retried internally.
#[derive(Error, Debug)]
pub enum DomainError {
    /// A lookup by identifier or unique name failed.
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// A create operation would duplicate a uniqueness constraint.
    #[error("{entity} already exists: {key}")]
    AlreadyExists { entity: &'static str, key: String },

    /// An incoming value failed a field-level constraint before any
    /// persistence attempt.
    #[error("validation failed on '{field}': {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// An internal error occurred.
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl DomainError {
    /// Creates a `NotFound` error.
    #[must_use]
    pub fn not_found(entity: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Creates an `AlreadyExists` error.
    #[must_use]
    pub fn already_exists(entity: &'static str, key: impl Into<String>) -> Self {
        Self::AlreadyExists {
            entity,
            key: key.into(),
        }
    }

    /// Creates a `Validation` error.
    #[must_use]
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        Self::Internal(e.into())
    }
}
