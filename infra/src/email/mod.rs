//! Email Service Module
//!
//! Implementations of the core notification trait used to deliver OTP
//! emails:
//!
//! - **Mock**: logs and records messages in memory
//! - **Http**: posts templated messages to a transactional email API

pub mod http;
pub mod mock;

use std::sync::Arc;

use tm_core::services::verification::NotificationServiceTrait;
use tm_shared::config::{EmailProvider, NotificationConfig};

use crate::InfrastructureError;

pub use http::HttpEmailService;
pub use mock::{MockEmailService, SentEmail};

/// Create the email service selected by configuration
pub fn create_email_service(
    config: &NotificationConfig,
) -> Result<Arc<dyn NotificationServiceTrait>, InfrastructureError> {
    match config.provider {
        EmailProvider::Mock => {
            tracing::info!("Using mock email service");
            Ok(Arc::new(MockEmailService::new()))
        }
        EmailProvider::Http => Ok(Arc::new(HttpEmailService::new(config)?)),
    }
}
