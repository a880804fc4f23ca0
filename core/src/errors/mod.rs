//! Domain-specific error types and error handling.

mod types;


pub use types::{AuthError, FieldViolation, TokenError};

use thiserror::Error;

/// Failure classes surfaced at the service boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    Unauthorized,
    Forbidden,
    NotFound,
    Internal,
}

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("{message}")]
    Validation {
        message: String,
        fields: Vec<FieldViolation>,
    },

    #[error("{message}")]
    Conflict { message: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    #[error("Database error: {0}")]
    Database(String),

    #[error("{service} error: {message}")]
    ExternalService { service: String, message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),
}

impl DomainError {
    /// Validation failure without field detail
    pub fn validation(message: impl Into<String>) -> Self {
        DomainError::Validation {
            message: message.into(),
            fields: Vec::new(),
        }
    }

    /// Validation failure listing each offending field
    pub fn invalid_fields(fields: Vec<FieldViolation>) -> Self {
        DomainError::Validation {
            message: String::from("Validation failed"),
            fields,
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        DomainError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        DomainError::Forbidden {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        DomainError::Conflict {
            message: message.into(),
        }
    }

    /// Failure reported by a third-party API
    pub fn external(service: impl Into<String>, message: impl Into<String>) -> Self {
        DomainError::ExternalService {
            service: service.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        DomainError::Internal {
            message: message.into(),
        }
    }

    /// Map every variant onto the boundary taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation { .. } => ErrorKind::Validation,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Forbidden { .. } => ErrorKind::Forbidden,
            DomainError::Auth(_) | DomainError::Token(_) => ErrorKind::Unauthorized,
            DomainError::Internal { .. }
            | DomainError::Database(_)
            | DomainError::ExternalService { .. } => ErrorKind::Internal,
        }
    }

    /// Field-level detail, empty for non-validation errors
    pub fn field_violations(&self) -> &[FieldViolation] {
        match self {
            DomainError::Validation { fields, .. } => fields,
            _ => &[],
        }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
