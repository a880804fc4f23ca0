//! Mock Email Service Implementation
//!
//! Logs templated messages instead of sending them and keeps a copy of each
//! one so tests and local runs can read the passcode back.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};
use uuid::Uuid;

use tm_core::services::verification::NotificationServiceTrait;
use tm_shared::utils::validation::mask_email;

/// A message captured by [`MockEmailService`]
#[derive(Debug, Clone, PartialEq)]
pub struct SentEmail {
    pub message_id: String,
    pub recipient: String,
    pub template: String,
    pub data: Value,
}

/// Mock email service for development and testing
#[derive(Clone, Default)]
pub struct MockEmailService {
    outbox: Arc<Mutex<Vec<SentEmail>>>,
    simulate_failure: bool,
}

impl MockEmailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// A service whose every send fails
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    /// Every message sent so far, oldest first
    pub async fn sent(&self) -> Vec<SentEmail> {
        self.outbox.lock().await.clone()
    }

    /// Most recent message addressed to `recipient`
    pub async fn last_to(&self, recipient: &str) -> Option<SentEmail> {
        self.outbox
            .lock()
            .await
            .iter()
            .rev()
            .find(|m| m.recipient == recipient)
            .cloned()
    }
}

#[async_trait]
impl NotificationServiceTrait for MockEmailService {
    async fn send_template(
        &self,
        recipient: &str,
        template: &str,
        data: Value,
    ) -> Result<String, String> {
        if self.simulate_failure {
            warn!(
                provider = "mock",
                recipient = %mask_email(recipient),
                "Mock email service simulating failure"
            );
            return Err("Simulated email sending failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        info!(
            target: "email_service",
            provider = "mock",
            recipient = %mask_email(recipient),
            template,
            message_id = %message_id,
            "Email sent (mock)"
        );

        self.outbox.lock().await.push(SentEmail {
            message_id: message_id.clone(),
            recipient: recipient.to_string(),
            template: template.to_string(),
            data,
        });

        Ok(message_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_records_sent_messages() {
        let service = MockEmailService::new();
        let id = service
            .send_template("a@x.com", "otp", json!({"code": "123456"}))
            .await
            .unwrap();

        assert!(id.starts_with("mock_"));
        let last = service.last_to("a@x.com").await.unwrap();
        assert_eq!(last.template, "otp");
        assert_eq!(last.data["code"], "123456");
        assert!(service.last_to("b@x.com").await.is_none());
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let service = MockEmailService::failing();
        assert!(service
            .send_template("a@x.com", "otp", json!({}))
            .await
            .is_err());
        assert!(service.sent().await.is_empty());
    }
}
