//! Email notification provider configuration

use serde::{Deserialize, Serialize};

/// Which email backend delivers notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailProvider {
    /// Log-only provider that records sent messages in memory
    Mock,
    /// Transactional email HTTP API
    Http,
}

impl std::str::FromStr for EmailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(EmailProvider::Mock),
            "http" => Ok(EmailProvider::Http),
            _ => Err(format!("Invalid email provider: {}", s)),
        }
    }
}

/// Email delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotificationConfig {
    pub provider: EmailProvider,

    /// Endpoint accepting `{from, to, template, data}` JSON payloads
    pub api_url: Option<String>,

    /// Bearer token for the email API
    pub api_key: Option<String>,

    /// Sender address
    pub from_address: String,

    /// Request timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            provider: EmailProvider::Mock,
            api_url: None,
            api_key: None,
            from_address: String::from("TourMate <no-reply@tourmate.app>"),
            timeout_seconds: 10,
        }
    }
}

impl NotificationConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: std::env::var("EMAIL_PROVIDER")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.provider),
            api_url: std::env::var("EMAIL_API_URL").ok(),
            api_key: std::env::var("EMAIL_API_KEY").ok(),
            from_address: std::env::var("EMAIL_FROM").unwrap_or(defaults.from_address),
            timeout_seconds: std::env::var("EMAIL_TIMEOUT_SECONDS")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(defaults.timeout_seconds),
        }
    }
}
