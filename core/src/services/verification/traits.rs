//! Traits for notification delivery

use async_trait::async_trait;

/// Trait for templated email delivery
///
/// Delivery is best-effort: callers log failures and carry on.
#[async_trait]
pub trait NotificationServiceTrait: Send + Sync {
    /// Send `template` rendered with `data` to `recipient`
    ///
    /// Returns the provider's message id.
    async fn send_template(
        &self,
        recipient: &str,
        template: &str,
        data: serde_json::Value,
    ) -> Result<String, String>;
}
