//! Outcome value objects returned by the account service.

use serde::{Deserialize, Serialize};

use crate::domain::entities::account::AccountProfile;

/// Result of registration, login, or verification
///
/// Either `token` is set (verified account) or `requires_verification` is
/// true and `otp_sent` tells whether a fresh passcode was just issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOutcome {
    /// Sanitized account view
    pub profile: AccountProfile,

    /// Signed session token, present only for verified accounts
    pub token: Option<String>,

    pub requires_verification: bool,

    /// Whether a new passcode was issued by this call
    pub otp_sent: bool,

    /// The passcode itself, only in deterministic mode
    pub otp: Option<String>,
}

impl AuthOutcome {
    /// Verified account with a fresh session token
    pub fn authenticated(profile: AccountProfile, token: String) -> Self {
        Self {
            profile,
            token: Some(token),
            requires_verification: false,
            otp_sent: false,
            otp: None,
        }
    }

    /// Unverified account that must complete OTP verification first
    pub fn pending_verification(
        profile: AccountProfile,
        otp_sent: bool,
        otp: Option<String>,
    ) -> Self {
        Self {
            profile,
            token: None,
            requires_verification: true,
            otp_sent,
            otp,
        }
    }
}

/// Acknowledgement of a resend request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResendReceipt {
    pub otp_sent: bool,
    pub expires_in_minutes: i64,
}
