//! Types returned by the payment service

use serde::{Deserialize, Serialize};

/// Checkout details for the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOrder {
    pub order_id: String,
    /// Booking price in major units
    pub amount: f64,
    pub currency: String,
    pub key_id: String,
}

/// Outcome of a successful signature check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentVerification {
    pub verified: bool,
    pub payment_id: String,
    pub order_id: String,
}
