//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `auth` - JWT signing and password hashing
//! - `booking` - Pricing fallback and status transition policy
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//! - `notification` - Email provider selection
//! - `otp` - One-time passcode lifetime and determinism
//! - `payment` - Payment gateway credentials
//! - `server` - HTTP server and CORS configuration

pub mod auth;
pub mod booking;
pub mod database;
pub mod environment;
pub mod notification;
pub mod otp;
pub mod payment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig};
pub use booking::BookingConfig;
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};
pub use notification::{EmailProvider, NotificationConfig};
pub use otp::OtpConfig;
pub use payment::PaymentConfig;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// One-time passcode configuration
    pub otp: OtpConfig,

    /// Email delivery configuration
    pub notification: NotificationConfig,

    /// Payment gateway configuration
    pub payment: PaymentConfig,

    /// Booking configuration
    pub booking: BookingConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment, ignoring process variables
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            otp: OtpConfig::for_environment(environment),
            notification: NotificationConfig::default(),
            payment: PaymentConfig::default(),
            booking: BookingConfig::default(),
            logging: LoggingConfig::for_environment(environment),
        }
    }

    /// Load configuration from environment
    ///
    /// Call `dotenvy::dotenv()` first if a `.env` file should be honoured.
    pub fn from_env() -> Self {
        let environment = Environment::from_env();
        Self {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            otp: OtpConfig::from_env(environment),
            notification: NotificationConfig::from_env(),
            payment: PaymentConfig::from_env(),
            booking: BookingConfig::from_env(),
            logging: LoggingConfig::from_env(environment),
        }
    }

    /// Problems that should stop a production deployment
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();
        if self.environment.is_production() {
            if self.auth.jwt.is_using_default_secret() {
                problems.push(String::from("JWT_SECRET must be set in production"));
            }
            if self.otp.deterministic {
                problems.push(String::from("OTP_DETERMINISTIC must be false in production"));
            }
            if self.database.url.is_none() {
                problems.push(String::from("DATABASE_URL must be set in production"));
            }
            if !self.payment.is_configured() {
                problems.push(String::from(
                    "RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must be set in production",
                ));
            }
            if self.notification.provider == EmailProvider::Mock {
                problems.push(String::from("EMAIL_PROVIDER must not be mock in production"));
            }
        }
        if self.notification.provider == EmailProvider::Http
            && self.notification.api_url.is_none()
        {
            problems.push(String::from(
                "EMAIL_API_URL must be set when EMAIL_PROVIDER is http",
            ));
        }
        if self.otp.expiration_minutes <= 0 {
            problems.push(String::from("OTP_EXPIRATION_MINUTES must be positive"));
        }
        if self.otp.deterministic && !self.otp.is_valid_fixed_code() {
            problems.push(format!(
                "OTP_FIXED_CODE must be {} ASCII digits",
                OtpConfig::CODE_LENGTH
            ));
        }
        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }
}
