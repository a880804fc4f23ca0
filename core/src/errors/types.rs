//! Specific error types for authentication and session tokens.
//!
//! These variants carry the client-facing message in their `Display`
//! implementation; the API layer renders them verbatim.

use thiserror::Error;

/// Authentication-related errors
///
/// Every variant is an unauthorized failure. Missing accounts and wrong
/// passwords share `InvalidCredentials` so callers cannot tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is deactivated")]
    AccountDeactivated,

    #[error("Invalid or expired OTP")]
    InvalidOrExpiredOtp,

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Account not found or inactive")]
    SessionAccountUnavailable,
}

/// Token-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Invalid signature")]
    InvalidSignature,

    #[error("Invalid claims")]
    InvalidClaims,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// A single field-level validation problem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: String,
    pub message: String,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
