//! Checkout order creation and payment confirmation

use actix_web::{web, HttpResponse};
use tm_core::domain::entities::account::AccountKind;
use tm_shared::ApiResponse;
use validator::Validate;

use crate::dto::{CreateOrderRequest, VerifyPaymentRequest};
use crate::handlers::ApiError;
use crate::middleware::{AuthContext, JwtAuth};
use crate::state::AppState;

const TRAVELERS_ONLY: &str = "Only travelers can pay for bookings";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/payments")
            .wrap(JwtAuth::new())
            .route("/orders", web::post().to(create_order))
            .route("/verify", web::post().to(verify_payment)),
    );
}

/// Handler for POST /api/v1/payments/orders
///
/// Opens a gateway order for the booking's price. The response carries the
/// public key id the checkout widget needs.
pub async fn create_order(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, ApiError> {
    auth.require_kind(AccountKind::Traveler, TRAVELERS_ONLY)?;

    let order = state
        .payment_service
        .create_order(request.booking_id, auth.account_id)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_status(
        "Payment order created successfully",
        order,
        201,
    )))
}

/// Handler for POST /api/v1/payments/verify
pub async fn verify_payment(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<VerifyPaymentRequest>,
) -> Result<HttpResponse, ApiError> {
    auth.require_kind(AccountKind::Traveler, TRAVELERS_ONLY)?;
    request.validate()?;

    let verification = state
        .payment_service
        .verify_payment(
            request.booking_id,
            auth.account_id,
            &request.payment_id,
            &request.order_id,
            &request.signature,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Payment verified successfully",
        verification,
    )))
}
