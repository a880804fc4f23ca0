use actix_web::{http::StatusCode, web, HttpResponse};
use validator::Validate;

use crate::dto::VerifyOtpRequest;
use crate::handlers::ApiError;
use crate::state::AppState;

use super::{outcome_response, parse_kind};

/// Handler for POST /api/v1/auth/{kind}/verify-otp
///
/// Consumes the passcode, marks the account verified and returns a session
/// token. A wrong, expired or already used code is a 401.
pub async fn verify_otp(
    state: web::Data<AppState>,
    kind: web::Path<String>,
    request: web::Json<VerifyOtpRequest>,
) -> Result<HttpResponse, ApiError> {
    let kind = parse_kind(&kind)?;
    request.validate()?;

    let outcome = state
        .account_service
        .complete_verification(kind, &request.email, request.otp.trim())
        .await?;

    Ok(outcome_response(
        outcome,
        "Account verified successfully! Registration completed.",
        StatusCode::OK,
    ))
}
