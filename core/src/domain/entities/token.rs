//! Session token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::{Account, AccountKind, Credentialed, GuiderType};

/// Claims structure for the session JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (account ID)
    pub sub: String,

    /// Account email
    pub email: String,

    /// Account mobile number, if any
    pub mobile: Option<String>,

    /// Account kind
    pub kind: AccountKind,

    /// Guider type for guider accounts
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub guider_type: Option<GuiderType>,

    /// Whether the account was verified at issue time
    pub is_verified: bool,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates session claims for an account
    ///
    /// # Arguments
    ///
    /// * `account` - The authenticated account
    /// * `issuer` - Value of the `iss` claim
    /// * `lifetime_seconds` - Seconds until the token expires
    pub fn for_account(account: &Account, issuer: &str, lifetime_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(lifetime_seconds);
        let guider_type = match account {
            Account::Guider(g) => Some(g.guider_type),
            Account::Traveler(_) => None,
        };

        Self {
            sub: account.id().to_string(),
            email: account.email().to_string(),
            mobile: account.base().mobile.clone(),
            kind: account.kind(),
            guider_type,
            is_verified: account.is_verified(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Parse the subject back into an account id
    pub fn account_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}
