//! One-time passcode record stored in the OTP ledger.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use tm_shared::config::OtpConfig;

use super::account::AccountKind;

/// Length of generated passcodes
pub const OTP_LENGTH: usize = OtpConfig::CODE_LENGTH;

/// Default lifetime of an issued passcode in minutes
pub const DEFAULT_OTP_EXPIRATION_MINUTES: i64 = 15;

/// Why a passcode was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OtpPurpose {
    Registration,
    Login,
}

impl OtpPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            OtpPurpose::Registration => "registration",
            OtpPurpose::Login => "login",
        }
    }
}

impl std::str::FromStr for OtpPurpose {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "registration" => Ok(OtpPurpose::Registration),
            "login" => Ok(OtpPurpose::Login),
            _ => Err(format!("Invalid OTP purpose: {}", s)),
        }
    }
}

/// A live or expired passcode. At most one exists per `(identifier, account_kind)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Normalized email the code was sent to
    pub identifier: String,
    pub account_kind: AccountKind,
    pub code: String,
    pub purpose: OtpPurpose,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a record issued at `now` that expires `lifetime_minutes` later
    pub fn issue(
        identifier: String,
        account_kind: AccountKind,
        code: String,
        purpose: OtpPurpose,
        now: DateTime<Utc>,
        lifetime_minutes: i64,
    ) -> Self {
        Self {
            identifier,
            account_kind,
            code,
            purpose,
            expires_at: now + Duration::minutes(lifetime_minutes),
            created_at: now,
        }
    }

    /// A record is live while `expires_at` is strictly in the future
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }

    /// Expired records are swept once `expires_at` has passed
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(now: DateTime<Utc>) -> OtpRecord {
        OtpRecord::issue(
            "a@x.com".to_string(),
            AccountKind::Traveler,
            "123456".to_string(),
            OtpPurpose::Registration,
            now,
            DEFAULT_OTP_EXPIRATION_MINUTES,
        )
    }

    #[test]
    fn test_expiry_is_fifteen_minutes_after_issue() {
        let now = Utc::now();
        let record = record_at(now);
        assert_eq!(record.expires_at - record.created_at, Duration::minutes(15));
    }

    #[test]
    fn test_liveness_boundary() {
        let now = Utc::now();
        let record = record_at(now);

        assert!(record.is_live(record.expires_at - Duration::seconds(1)));
        assert!(!record.is_live(record.expires_at));
        assert!(!record.is_live(record.expires_at + Duration::seconds(1)));

        assert!(!record.is_expired(record.expires_at));
        assert!(record.is_expired(record.expires_at + Duration::seconds(1)));
    }
}
