//! Payment gateway implementations

pub mod mock;
pub mod razorpay;

use std::sync::Arc;

use tm_core::services::payment::PaymentGateway;
use tm_shared::config::PaymentConfig;

use crate::InfrastructureError;

pub use mock::MockPaymentGateway;
pub use razorpay::RazorpayGateway;

/// Razorpay when credentials are configured, otherwise the offline mock
pub fn create_payment_gateway(
    config: &PaymentConfig,
) -> Result<Arc<dyn PaymentGateway>, InfrastructureError> {
    if config.is_configured() {
        Ok(Arc::new(RazorpayGateway::new(config)?))
    } else {
        tracing::warn!("Payment gateway credentials missing, using mock gateway");
        Ok(Arc::new(MockPaymentGateway::new()))
    }
}
