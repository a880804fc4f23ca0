use serde::{Deserialize, Serialize};
use tm_core::domain::entities::account::{GuiderType, RateSchedule};
use tm_core::domain::entities::otp::OtpPurpose;
use tm_core::errors::{DomainError, FieldViolation};
use tm_core::services::account::{GuiderRegistration, TravelerRegistration};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TravelerRegisterRequest {
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    #[validate(length(max = 20, message = "Mobile number is too long"))]
    pub mobile: Option<String>,
    #[validate(length(max = 128, message = "Password is too long"))]
    pub password: String,
    #[validate(length(max = 100, message = "First name is too long"))]
    pub first_name: String,
    #[validate(length(max = 100, message = "Last name is too long"))]
    pub last_name: String,
    #[validate(length(max = 100, message = "City is too long"))]
    pub city: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "Too many travel styles"))]
    pub travel_styles: Vec<String>,
}

impl From<TravelerRegisterRequest> for TravelerRegistration {
    fn from(req: TravelerRegisterRequest) -> Self {
        Self {
            email: req.email,
            mobile: req.mobile,
            password: req.password,
            first_name: req.first_name,
            last_name: req.last_name,
            city: req.city,
            travel_styles: req.travel_styles,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuiderRegisterRequest {
    #[validate(length(max = 254, message = "Email is too long"))]
    pub email: String,
    #[validate(length(max = 20, message = "Mobile number is too long"))]
    pub mobile: Option<String>,
    #[validate(length(max = 128, message = "Password is too long"))]
    pub password: String,
    #[validate(length(max = 120, message = "Showcase name is too long"))]
    pub showcase_name: String,
    /// `Professional` or `Agency`; defaults to `Professional`
    pub guider_type: Option<String>,
    #[validate(length(max = 100, message = "City is too long"))]
    pub city: Option<String>,
    #[validate(length(max = 2000, message = "Overview is too long"))]
    pub overview: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20, message = "Too many languages"))]
    pub languages: Vec<String>,
    pub price_per_hour: Option<f64>,
    pub price_per_day: Option<f64>,
    pub price_per_tour: Option<f64>,
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: Option<String>,
}

impl TryFrom<GuiderRegisterRequest> for GuiderRegistration {
    type Error = DomainError;

    fn try_from(req: GuiderRegisterRequest) -> Result<Self, Self::Error> {
        let guider_type = match req.guider_type.as_deref() {
            None => GuiderType::Professional,
            Some(raw) => raw.parse().map_err(|_| {
                DomainError::invalid_fields(vec![FieldViolation::new(
                    "guiderType",
                    "Guider type must be Professional or Agency",
                )])
            })?,
        };

        Ok(Self {
            email: req.email,
            mobile: req.mobile,
            password: req.password,
            showcase_name: req.showcase_name,
            guider_type,
            city: req.city,
            overview: req.overview,
            languages: req.languages,
            rates: RateSchedule {
                price_per_hour: req.price_per_hour,
                price_per_day: req.price_per_day,
                price_per_tour: req.price_per_tour,
            },
            currency: req.currency.map(|c| c.to_uppercase()),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, max = 128, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, max = 254, message = "Email is required"))]
    pub email: String,
    #[serde(alias = "code")]
    #[validate(length(min = 1, max = 12, message = "OTP is required"))]
    pub otp: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpRequest {
    #[validate(email(message = "Please provide a valid email"))]
    pub email: String,
    /// `registration` (default) or `login`
    pub action_type: Option<String>,
}

impl ResendOtpRequest {
    pub fn purpose(&self) -> Result<OtpPurpose, DomainError> {
        match self.action_type.as_deref() {
            None => Ok(OtpPurpose::Registration),
            Some(raw) => raw.parse().map_err(|_| {
                DomainError::invalid_fields(vec![FieldViolation::new(
                    "actionType",
                    "Action type must be registration or login",
                )])
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendOtpResponse {
    pub otp_sent: bool,
    /// Minutes until the passcode expires
    pub expires_in: i64,
}

/// Presence checks live in the account service so both fields are optional here
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[serde(default)]
    #[validate(length(max = 128, message = "Old password is too long"))]
    pub old_password: String,
    #[serde(default)]
    #[validate(length(max = 128, message = "New password is too long"))]
    pub new_password: String,
}
