use actix_web::{web, HttpResponse};
use tm_shared::ApiResponse;
use validator::Validate;

use crate::dto::{ResendOtpRequest, ResendOtpResponse};
use crate::handlers::ApiError;
use crate::state::AppState;

use super::parse_kind;

/// Handler for POST /api/v1/auth/{kind}/resend-otp
///
/// Always acknowledges with the same body whether or not the email belongs
/// to an account, so the endpoint cannot be used to probe for accounts.
pub async fn resend_otp(
    state: web::Data<AppState>,
    kind: web::Path<String>,
    request: web::Json<ResendOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    let kind = parse_kind(&kind)?;
    request.validate()?;
    let purpose = request.purpose()?;

    let receipt = state
        .account_service
        .resend_otp(kind, &request.email, purpose)
        .await?;

    let mut body = ApiResponse::success(
        "OTP resent successfully",
        ResendOtpResponse {
            otp_sent: receipt.otp_sent,
            expires_in: receipt.expires_in_minutes,
        },
    );
    body.otp_sent = Some(receipt.otp_sent);

    Ok(HttpResponse::Ok().json(body))
}
