//! Transactional email over HTTP
//!
//! Posts `{from, to, template, data}` to the configured endpoint with a
//! bearer key and reads the provider's message id from the JSON reply.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info};

use tm_core::services::verification::NotificationServiceTrait;
use tm_shared::config::NotificationConfig;
use tm_shared::utils::validation::mask_email;

use crate::InfrastructureError;

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    from: &'a str,
    to: &'a str,
    template: &'a str,
    data: Value,
}

#[derive(Debug, Deserialize)]
struct SendResponse {
    #[serde(alias = "messageId")]
    id: String,
}

/// Email service backed by an HTTP API
pub struct HttpEmailService {
    client: Client,
    api_url: String,
    api_key: Option<String>,
    from_address: String,
}

impl HttpEmailService {
    /// Build the client from configuration
    ///
    /// # Errors
    /// * `InfrastructureError::Config` - `api_url` is missing
    /// * `InfrastructureError::Http` - The HTTP client could not be built
    pub fn new(config: &NotificationConfig) -> Result<Self, InfrastructureError> {
        let api_url = config
            .api_url
            .clone()
            .filter(|u| !u.is_empty())
            .ok_or_else(|| InfrastructureError::Config("EMAIL_API_URL is not set".to_string()))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        info!(endpoint = %api_url, "HTTP email service initialized");

        Ok(Self {
            client,
            api_url,
            api_key: config.api_key.clone(),
            from_address: config.from_address.clone(),
        })
    }

    async fn send(
        &self,
        recipient: &str,
        template: &str,
        data: Value,
    ) -> Result<String, InfrastructureError> {
        let body = SendRequest {
            from: &self.from_address,
            to: recipient,
            template,
            data,
        };

        let mut request = self.client.post(&self.api_url).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(InfrastructureError::Email(format!(
                "provider returned {}: {}",
                status, detail
            )));
        }

        let parsed: SendResponse = response.json().await?;
        Ok(parsed.id)
    }
}

#[async_trait]
impl NotificationServiceTrait for HttpEmailService {
    async fn send_template(
        &self,
        recipient: &str,
        template: &str,
        data: Value,
    ) -> Result<String, String> {
        match self.send(recipient, template, data).await {
            Ok(message_id) => {
                info!(
                    target: "email_service",
                    provider = "http",
                    recipient = %mask_email(recipient),
                    template,
                    message_id = %message_id,
                    "Email sent"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    target: "email_service",
                    provider = "http",
                    recipient = %mask_email(recipient),
                    error = %e,
                    "Email delivery failed"
                );
                Err(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tm_shared::config::EmailProvider;

    #[test]
    fn test_requires_api_url() {
        let config = NotificationConfig {
            provider: EmailProvider::Http,
            ..NotificationConfig::default()
        };
        let err = HttpEmailService::new(&config).err().unwrap();
        assert!(matches!(err, InfrastructureError::Config(_)));
    }

    #[test]
    fn test_builds_with_endpoint() {
        let config = NotificationConfig {
            provider: EmailProvider::Http,
            api_url: Some("http://localhost:9/send".to_string()),
            api_key: Some("key".to_string()),
            ..NotificationConfig::default()
        };
        let service = HttpEmailService::new(&config).unwrap();
        assert_eq!(service.api_url, "http://localhost:9/send");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_reports_error() {
        let config = NotificationConfig {
            provider: EmailProvider::Http,
            api_url: Some("http://127.0.0.1:9/send".to_string()),
            timeout_seconds: 1,
            ..NotificationConfig::default()
        };
        let service = HttpEmailService::new(&config).unwrap();
        let result = service
            .send_template("a@x.com", "otp", serde_json::json!({}))
            .await;
        assert!(result.is_err());
    }
}
