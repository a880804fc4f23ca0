//! Traits for payment gateway integration

use async_trait::async_trait;

/// Order as acknowledged by the gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayOrder {
    pub id: String,
    /// Amount in the currency's minor unit
    pub amount_minor: u64,
    pub currency: String,
}

/// Trait for creating checkout orders with a payment provider
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order for `amount_minor` (paise for INR)
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, String>;
}
