//! Razorpay order API client

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{error, info};

use tm_core::services::payment::{GatewayOrder, PaymentGateway};
use tm_shared::config::PaymentConfig;

use crate::InfrastructureError;

const REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Serialize)]
struct CreateOrderRequest<'a> {
    amount: u64,
    currency: &'a str,
    receipt: &'a str,
}

#[derive(Debug, Deserialize)]
struct OrderResponse {
    id: String,
    amount: u64,
    currency: String,
}

/// Creates checkout orders through `POST {base_url}/orders`
pub struct RazorpayGateway {
    client: Client,
    base_url: String,
    key_id: String,
    key_secret: String,
}

impl RazorpayGateway {
    /// # Errors
    /// * `InfrastructureError::Config` - Key id or secret missing
    pub fn new(config: &PaymentConfig) -> Result<Self, InfrastructureError> {
        if !config.is_configured() {
            return Err(InfrastructureError::Config(
                "RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET must be set".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            key_id: config.key_id.clone(),
            key_secret: config.key_secret.clone(),
        })
    }

    async fn post_order(
        &self,
        amount_minor: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<OrderResponse, InfrastructureError> {
        let response = self
            .client
            .post(format!("{}/orders", self.base_url))
            .basic_auth(&self.key_id, Some(&self.key_secret))
            .json(&CreateOrderRequest {
                amount: amount_minor,
                currency,
                receipt,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Payment(format!(
                "order creation returned {}: {}",
                status, detail
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl PaymentGateway for RazorpayGateway {
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
        receipt: &str,
    ) -> Result<GatewayOrder, String> {
        match self.post_order(amount_minor, currency, receipt).await {
            Ok(order) => {
                info!(
                    event = "payment_order_created",
                    order_id = %order.id,
                    amount = order.amount,
                    "Gateway order created"
                );
                Ok(GatewayOrder {
                    id: order.id,
                    amount_minor: order.amount,
                    currency: order.currency,
                })
            }
            Err(e) => {
                error!(event = "payment_order_failed", receipt, error = %e, "Gateway order failed");
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requires_credentials() {
        assert!(RazorpayGateway::new(&PaymentConfig::default()).is_err());
    }

    #[test]
    fn test_trims_base_url() {
        let config = PaymentConfig {
            key_id: "rzp_test_key".to_string(),
            key_secret: "secret".to_string(),
            base_url: "https://api.example.com/v1/".to_string(),
            ..PaymentConfig::default()
        };
        let gateway = RazorpayGateway::new(&config).unwrap();
        assert_eq!(gateway.base_url, "https://api.example.com/v1");
    }
}
