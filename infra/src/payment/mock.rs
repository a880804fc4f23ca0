//! Offline payment gateway for development

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

use tm_core::services::payment::{GatewayOrder, PaymentGateway};

/// Gateway that acknowledges every order locally with ids `order_mock_{n}`
#[derive(Default)]
pub struct MockPaymentGateway {
    counter: AtomicU64,
}

impl MockPaymentGateway {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PaymentGateway for MockPaymentGateway {
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, String> {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        let id = format!("order_mock_{}", n);
        info!(provider = "mock", order_id = %id, amount_minor, receipt, "Gateway order created (mock)");
        Ok(GatewayOrder {
            id,
            amount_minor,
            currency: currency.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_orders_are_numbered() {
        let gateway = MockPaymentGateway::new();
        let first = gateway.create_order(100, "INR", "r1").await.unwrap();
        let second = gateway.create_order(250, "INR", "r2").await.unwrap();
        assert_eq!(first.id, "order_mock_1");
        assert_eq!(second.id, "order_mock_2");
        assert_eq!(second.amount_minor, 250);
    }
}
