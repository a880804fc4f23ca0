//! Payment gateway configuration

use serde::{Deserialize, Serialize};

/// Razorpay-compatible gateway credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PaymentConfig {
    /// Public key id, also returned to clients for checkout
    pub key_id: String,

    /// Shared secret used for order creation and signature checks
    pub key_secret: String,

    /// Gateway API base URL
    pub base_url: String,

    /// Currency used when a booking carries none
    pub currency: String,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            key_id: String::new(),
            key_secret: String::new(),
            base_url: String::from("https://api.razorpay.com/v1"),
            currency: String::from("INR"),
        }
    }
}

impl PaymentConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            key_id: std::env::var("RAZORPAY_KEY_ID").unwrap_or(defaults.key_id),
            key_secret: std::env::var("RAZORPAY_KEY_SECRET").unwrap_or(defaults.key_secret),
            base_url: std::env::var("RAZORPAY_BASE_URL").unwrap_or(defaults.base_url),
            currency: std::env::var("PAYMENT_CURRENCY").unwrap_or(defaults.currency),
        }
    }

    /// Gateway calls need both halves of the credential pair
    pub fn is_configured(&self) -> bool {
        !self.key_id.is_empty() && !self.key_secret.is_empty()
    }
}
