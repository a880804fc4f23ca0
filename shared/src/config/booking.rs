//! Booking pricing and lifecycle configuration

use serde::{Deserialize, Serialize};

/// Settings consumed by the booking service
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BookingConfig {
    /// Hourly rate applied when a guider has no rate schedule
    pub default_hourly_rate: f64,

    /// Enforce the pending/accepted/terminal transition graph
    pub strict_transitions: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            default_hourly_rate: 500.0,
            strict_transitions: false,
        }
    }
}

impl BookingConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_hourly_rate: std::env::var("DEFAULT_HOURLY_RATE")
                .ok()
                .and_then(|r| r.parse().ok())
                .unwrap_or(defaults.default_hourly_rate),
            strict_transitions: std::env::var("BOOKING_TRANSITION_POLICY")
                .map(|p| p.eq_ignore_ascii_case("strict"))
                .unwrap_or(defaults.strict_transitions),
        }
    }
}
