use actix_web::{http::StatusCode, web, HttpResponse};
use tm_core::services::account::{GuiderRegistration, Registration, TravelerRegistration};
use tm_shared::validation::mask_email;
use validator::Validate;

use crate::dto::{GuiderRegisterRequest, TravelerRegisterRequest};
use crate::handlers::ApiError;
use crate::state::AppState;

use super::outcome_response;

const REGISTERED: &str =
    "Registration successful! OTP sent to your email. Please verify to complete registration.";

/// Handler for POST /api/v1/auth/traveler/register
///
/// Creates an unverified traveler and emails the first passcode. Answers
/// 201 with the profile, `requiresVerification: true` and `otpSent`.
pub async fn register_traveler(
    state: web::Data<AppState>,
    request: web::Json<TravelerRegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), kind = "traveler", "Registration requested");
    let registration = Registration::Traveler(TravelerRegistration::from(request));
    let outcome = state.account_service.register(registration).await?;

    Ok(outcome_response(outcome, REGISTERED, StatusCode::CREATED))
}

/// Handler for POST /api/v1/auth/guider/register
pub async fn register_guider(
    state: web::Data<AppState>,
    request: web::Json<GuiderRegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = request.into_inner();
    request.validate()?;

    tracing::info!(email = %mask_email(&request.email), kind = "guider", "Registration requested");
    let registration = Registration::Guider(GuiderRegistration::try_from(request)?);
    let outcome = state.account_service.register(registration).await?;

    Ok(outcome_response(outcome, REGISTERED, StatusCode::CREATED))
}
