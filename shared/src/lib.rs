//! Shared utilities and common types for the TourMate server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the process environment
//! - The uniform API response envelope
//! - Small validation helpers (email, mobile, masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, BookingConfig, DatabaseConfig, Environment, JwtConfig, LoggingConfig,
    NotificationConfig, OtpConfig, PaymentConfig, ServerConfig,
};
pub use types::{ApiResponse, FieldError};
pub use utils::validation;
