//! Types for verification service results

use chrono::{DateTime, Utc};

/// Name of the passcode email template
pub const OTP_TEMPLATE: &str = "otp-verification";

/// Result of issuing a passcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueResult {
    /// When the passcode stops being accepted
    pub expires_at: DateTime<Utc>,
    /// The passcode, only in deterministic mode
    pub code: Option<String>,
}

/// Result of checking for a live passcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpStatus {
    /// A live passcode already existed; nothing was sent
    pub has_valid_otp: bool,
    /// The newly issued passcode, only in deterministic mode
    pub code: Option<String>,
}
