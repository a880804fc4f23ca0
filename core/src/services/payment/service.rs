//! Payment order creation and signature verification

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::booking::Booking;
use crate::errors::{DomainError, DomainResult};
use crate::services::booking::BookingService;

use super::config::PaymentServiceConfig;
use super::traits::PaymentGateway;
use super::types::{PaymentOrder, PaymentVerification};

type HmacSha256 = Hmac<Sha256>;

const GATEWAY_NAME: &str = "Payment gateway";

/// Hex HMAC-SHA256 of `"{order_id}|{payment_id}"` under `key_secret`
pub fn sign_payment(key_secret: &str, order_id: &str, payment_id: &str) -> DomainResult<String> {
    let mut mac = HmacSha256::new_from_slice(key_secret.as_bytes())
        .map_err(|e| DomainError::internal(format!("Invalid payment key: {}", e)))?;
    mac.update(format!("{}|{}", order_id, payment_id).as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

/// Payment service bridging bookings and the gateway
pub struct PaymentService {
    booking_service: Arc<BookingService>,
    gateway: Arc<dyn PaymentGateway>,
    config: PaymentServiceConfig,
}

impl PaymentService {
    pub fn new(
        booking_service: Arc<BookingService>,
        gateway: Arc<dyn PaymentGateway>,
        config: PaymentServiceConfig,
    ) -> Self {
        Self {
            booking_service,
            gateway,
            config,
        }
    }

    /// Open a gateway order for the traveler's unpaid booking
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such booking
    /// * `DomainError::Forbidden` - Booking belongs to another traveler
    /// * `DomainError::Validation` - Booking already paid
    /// * `DomainError::ExternalService` - Gateway rejected the order
    pub async fn create_order(&self, booking_id: Uuid, traveler_id: Uuid) -> DomainResult<PaymentOrder> {
        let booking = self.travelers_booking(booking_id, traveler_id).await?;
        if booking.is_paid {
            return Err(DomainError::validation("Booking is already paid"));
        }

        let amount_minor = (booking.price * 100.0).round() as u64;
        let receipt = format!("receipt_{}", Utc::now().timestamp_millis());

        let order = self
            .gateway
            .create_order(amount_minor, &booking.currency, &receipt)
            .await
            .map_err(|e| {
                tracing::error!(
                    booking_id = %booking_id,
                    error = %e,
                    event = "payment_order_failed",
                    "Gateway order creation failed"
                );
                DomainError::external(GATEWAY_NAME, e)
            })?;

        self.booking_service
            .attach_payment_order(booking_id, &order.id)
            .await?;

        tracing::info!(
            booking_id = %booking_id,
            order_id = %order.id,
            amount_minor,
            event = "payment_order_created",
            "Payment order created"
        );

        Ok(PaymentOrder {
            order_id: order.id,
            amount: booking.price,
            currency: order.currency,
            key_id: self.config.key_id.clone(),
        })
    }

    /// Check a checkout callback and mark the booking paid
    ///
    /// The signature must be the gateway HMAC over the order and payment ids,
    /// and the order must be the one opened for this booking.
    pub async fn verify_payment(
        &self,
        booking_id: Uuid,
        traveler_id: Uuid,
        payment_id: &str,
        order_id: &str,
        signature: &str,
    ) -> DomainResult<PaymentVerification> {
        let booking = self.travelers_booking(booking_id, traveler_id).await?;

        let expected = sign_payment(&self.config.key_secret, order_id, payment_id)?;
        let signature_ok = constant_time_eq(expected.as_bytes(), signature.as_bytes());
        let order_ok = booking.payment_ref.as_deref() == Some(order_id);

        if !signature_ok || !order_ok {
            tracing::warn!(
                booking_id = %booking_id,
                signature_ok,
                order_ok,
                event = "payment_verification_failed",
                "Payment verification failed"
            );
            return Err(DomainError::validation("Payment verification failed"));
        }

        self.booking_service.mark_paid(booking_id, payment_id).await?;

        Ok(PaymentVerification {
            verified: true,
            payment_id: payment_id.to_string(),
            order_id: order_id.to_string(),
        })
    }

    async fn travelers_booking(&self, booking_id: Uuid, traveler_id: Uuid) -> DomainResult<Booking> {
        let booking = self.booking_service.get_by_id(booking_id, traveler_id).await?;
        if booking.traveler_id != traveler_id {
            return Err(DomainError::forbidden("Access denied"));
        }
        Ok(booking)
    }
}
