//! Infrastructure-specific error types

use tm_core::errors::DomainError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Email provider error
    #[error("Email service error: {0}")]
    Email(String),

    /// Payment gateway error
    #[error("Payment gateway error: {0}")]
    Payment(String),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => DomainError::Database(e.to_string()),
            InfrastructureError::Http(e) => DomainError::external("HTTP", e.to_string()),
            InfrastructureError::Email(message) => DomainError::external("Email", message),
            InfrastructureError::Payment(message) => DomainError::external("Payment gateway", message),
            InfrastructureError::Config(message) => DomainError::internal(message),
        }
    }
}
