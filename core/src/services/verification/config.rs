//! Configuration for the verification service

use tm_shared::config::OtpConfig;

use crate::domain::entities::otp::DEFAULT_OTP_EXPIRATION_MINUTES;

/// How passcode notifications are dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Spawn a task and return immediately
    Background,
    /// Await the send before returning; failures are still swallowed
    Inline,
}

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a passcode expires
    pub code_expiration_minutes: i64,
    /// Issue `fixed_code` and return it to callers
    pub deterministic: bool,
    /// Code used in deterministic mode
    pub fixed_code: String,
    /// Notification dispatch mode
    pub delivery: DeliveryMode,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_OTP_EXPIRATION_MINUTES,
            deterministic: false,
            fixed_code: String::from("123456"),
            delivery: DeliveryMode::Background,
        }
    }
}

impl From<&OtpConfig> for VerificationServiceConfig {
    fn from(otp: &OtpConfig) -> Self {
        Self {
            code_expiration_minutes: otp.expiration_minutes,
            deterministic: otp.deterministic,
            fixed_code: otp.fixed_code.clone(),
            delivery: DeliveryMode::Background,
        }
    }
}
