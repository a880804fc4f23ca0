//! Registration payloads accepted by the account service

use tm_shared::validation::{is_valid_email, is_valid_mobile, not_blank};

use crate::domain::entities::account::{AccountKind, GuiderType, RateSchedule};
use crate::errors::FieldViolation;

/// Shortest password accepted at registration and password change
pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, PartialEq)]
pub struct TravelerRegistration {
    pub email: String,
    pub mobile: Option<String>,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub city: Option<String>,
    pub travel_styles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GuiderRegistration {
    pub email: String,
    pub mobile: Option<String>,
    pub password: String,
    pub showcase_name: String,
    pub guider_type: GuiderType,
    pub city: Option<String>,
    pub overview: Option<String>,
    pub languages: Vec<String>,
    pub rates: RateSchedule,
    /// Falls back to the marketplace default when absent
    pub currency: Option<String>,
}

/// Registration request for either account kind
#[derive(Debug, Clone, PartialEq)]
pub enum Registration {
    Traveler(TravelerRegistration),
    Guider(GuiderRegistration),
}

impl Registration {
    pub fn kind(&self) -> AccountKind {
        match self {
            Registration::Traveler(_) => AccountKind::Traveler,
            Registration::Guider(_) => AccountKind::Guider,
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Registration::Traveler(t) => &t.email,
            Registration::Guider(g) => &g.email,
        }
    }

    pub fn password(&self) -> &str {
        match self {
            Registration::Traveler(t) => &t.password,
            Registration::Guider(g) => &g.password,
        }
    }

    fn mobile(&self) -> Option<&str> {
        match self {
            Registration::Traveler(t) => t.mobile.as_deref(),
            Registration::Guider(g) => g.mobile.as_deref(),
        }
    }

    /// Collect every field problem in the request
    pub fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();

        if !is_valid_email(self.email()) {
            violations.push(FieldViolation::new("email", "Please provide a valid email"));
        }
        if self.password().chars().count() < MIN_PASSWORD_LENGTH {
            violations.push(FieldViolation::new(
                "password",
                format!("Password must be at least {} characters", MIN_PASSWORD_LENGTH),
            ));
        }
        if let Some(mobile) = self.mobile() {
            if !is_valid_mobile(mobile) {
                violations.push(FieldViolation::new("mobile", "Please provide a valid mobile number"));
            }
        }

        match self {
            Registration::Traveler(t) => {
                if !not_blank(&t.first_name) {
                    violations.push(FieldViolation::new("firstName", "First name is required"));
                }
                if !not_blank(&t.last_name) {
                    violations.push(FieldViolation::new("lastName", "Last name is required"));
                }
            }
            Registration::Guider(g) => {
                if !not_blank(&g.showcase_name) {
                    violations.push(FieldViolation::new("showcaseName", "Showcase name is required"));
                }
                let negative = [g.rates.price_per_hour, g.rates.price_per_day, g.rates.price_per_tour]
                    .into_iter()
                    .flatten()
                    .any(|p| p < 0.0);
                if negative {
                    violations.push(FieldViolation::new("rates", "Prices cannot be negative"));
                }
            }
        }

        violations
    }
}
