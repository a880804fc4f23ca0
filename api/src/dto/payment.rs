use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub booking_id: Uuid,
}

/// Checkout callback fields; the `razorpay*` names are accepted too
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyPaymentRequest {
    pub booking_id: Uuid,
    #[serde(alias = "razorpayPaymentId")]
    #[validate(length(min = 1, max = 64, message = "Payment id is required"))]
    pub payment_id: String,
    #[serde(alias = "razorpayOrderId")]
    #[validate(length(min = 1, max = 64, message = "Order id is required"))]
    pub order_id: String,
    #[serde(alias = "razorpaySignature")]
    #[validate(length(min = 1, max = 128, message = "Signature is required"))]
    pub signature: String,
}
