//! One-time passcode configuration

use serde::{Deserialize, Serialize};

use super::environment::Environment;

/// OTP issuance and sweep settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OtpConfig {
    /// Minutes before an issued code expires
    pub expiration_minutes: i64,

    /// Issue `fixed_code` instead of a random code and echo it back to callers
    pub deterministic: bool,

    /// Code used when `deterministic` is on
    pub fixed_code: String,

    /// Interval between expired-code sweeps, in seconds
    pub sweep_interval_seconds: u64,

    /// Whether the periodic sweep runs at all
    pub sweep_enabled: bool,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl OtpConfig {
    /// Length of every issued code
    pub const CODE_LENGTH: usize = 6;

    /// Whether `fixed_code` has the shape the verifier accepts
    pub fn is_valid_fixed_code(&self) -> bool {
        self.fixed_code.len() == Self::CODE_LENGTH
            && self.fixed_code.bytes().all(|b| b.is_ascii_digit())
    }

    /// Deterministic codes outside production, random codes in production
    pub fn for_environment(env: Environment) -> Self {
        Self {
            expiration_minutes: 15,
            deterministic: !env.is_production(),
            fixed_code: String::from("123456"),
            sweep_interval_seconds: 300,
            sweep_enabled: true,
        }
    }

    /// Create from environment variables
    pub fn from_env(env: Environment) -> Self {
        let defaults = Self::for_environment(env);
        Self {
            expiration_minutes: std::env::var("OTP_EXPIRATION_MINUTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.expiration_minutes),
            deterministic: std::env::var("OTP_DETERMINISTIC")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.deterministic),
            fixed_code: std::env::var("OTP_FIXED_CODE").unwrap_or(defaults.fixed_code),
            sweep_interval_seconds: std::env::var("OTP_SWEEP_INTERVAL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval_seconds),
            sweep_enabled: std::env::var("OTP_SWEEP_ENABLED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_enabled),
        }
    }
}
