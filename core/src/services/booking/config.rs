//! Configuration for the booking service

use tm_shared::config::BookingConfig;

use crate::domain::entities::booking::{BookingStatus, DEFAULT_HOURLY_RATE};

/// Which status changes a guider may make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionPolicy {
    /// Any status may replace any other
    #[default]
    Lenient,
    /// Only edges of [`BookingStatus::can_transition_to`]
    Strict,
}

impl TransitionPolicy {
    pub fn allows(&self, from: BookingStatus, to: BookingStatus) -> bool {
        match self {
            TransitionPolicy::Lenient => true,
            TransitionPolicy::Strict => from.can_transition_to(to),
        }
    }
}

/// Configuration for the booking service
#[derive(Debug, Clone)]
pub struct BookingServiceConfig {
    /// Hourly rate for guiders without published prices
    pub default_hourly_rate: f64,
    pub transition_policy: TransitionPolicy,
}

impl Default for BookingServiceConfig {
    fn default() -> Self {
        Self {
            default_hourly_rate: DEFAULT_HOURLY_RATE,
            transition_policy: TransitionPolicy::Lenient,
        }
    }
}

impl From<&BookingConfig> for BookingServiceConfig {
    fn from(booking: &BookingConfig) -> Self {
        Self {
            default_hourly_rate: booking.default_hourly_rate,
            transition_policy: if booking.strict_transitions {
                TransitionPolicy::Strict
            } else {
                TransitionPolicy::Lenient
            },
        }
    }
}
