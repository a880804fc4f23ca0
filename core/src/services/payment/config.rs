//! Configuration for the payment service

use tm_shared::config::PaymentConfig;

/// Gateway credentials used by the payment service
#[derive(Debug, Clone, Default)]
pub struct PaymentServiceConfig {
    /// Public key id handed to the checkout client
    pub key_id: String,
    /// HMAC key for payment signatures
    pub key_secret: String,
}

impl From<&PaymentConfig> for PaymentServiceConfig {
    fn from(payment: &PaymentConfig) -> Self {
        Self {
            key_id: payment.key_id.clone(),
            key_secret: payment.key_secret.clone(),
        }
    }
}
