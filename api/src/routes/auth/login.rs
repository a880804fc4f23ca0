use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use crate::dto::LoginRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

use super::{outcome_response, parse_kind};

/// Handler for POST /api/v1/auth/{kind}/login
///
/// A verified account receives a token. An unverified one receives
/// `requiresVerification: true` and, when no live passcode existed, a fresh
/// one is emailed (`otpSent: true`).
pub async fn login(
    state: web::Data<AppState>,
    kind: web::Path<String>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    let kind = parse_kind(&kind)?;
    request.validate()?;

    let outcome = state
        .account_service
        .login(kind, &request.email, &request.password)
        .await?;

    let message = match (outcome.requires_verification, outcome.otp_sent) {
        (false, _) => "Login successful",
        (true, true) => "Account not verified. A new OTP has been sent to your email. Please verify to complete registration.",
        (true, false) => "Account not verified. Please verify your OTP to complete registration.",
    };

    Ok(outcome_response(outcome, message, StatusCode::OK))
}
