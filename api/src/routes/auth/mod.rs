//! Authentication routes
//!
//! Account kind is part of the path (`traveler` or `guider`); the same email
//! may hold one account of each kind.

pub mod change_password;
pub mod login;
pub mod me;
pub mod register;
pub mod resend_otp;
pub mod verify_otp;

use actix_web::{http::StatusCode, web, HttpResponse};
use tm_core::domain::entities::account::AccountKind;
use tm_core::domain::value_objects::AuthOutcome;
use tm_core::errors::DomainError;
use tm_shared::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::JwtAuth;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/traveler/register", web::post().to(register::register_traveler))
            .route("/guider/register", web::post().to(register::register_guider))
            .route("/{kind}/verify-otp", web::post().to(verify_otp::verify_otp))
            .route("/{kind}/resend-otp", web::post().to(resend_otp::resend_otp))
            .route("/{kind}/login", web::post().to(login::login))
            .route(
                "/change-password",
                web::post()
                    .to(change_password::change_password)
                    .wrap(JwtAuth::new()),
            )
            .route("/me", web::get().to(me::me).wrap(JwtAuth::new())),
    );
}

/// Account kind from the path, 404 for anything else
pub(crate) fn parse_kind(raw: &str) -> Result<AccountKind, ApiError> {
    raw.parse()
        .map_err(|_| DomainError::not_found("Account type").into())
}

/// Envelope for an auth outcome
///
/// Verified accounts get their token; unverified ones get the
/// `requiresVerification` / `otpSent` flags and, in deterministic mode, the
/// passcode itself.
pub(crate) fn outcome_response(
    outcome: AuthOutcome,
    message: &str,
    status: StatusCode,
) -> HttpResponse {
    let mut body = ApiResponse::success_with_status(message, outcome.profile, status.as_u16());
    if let Some(token) = outcome.token {
        body = body.with_token(token);
    }
    if outcome.requires_verification {
        body = body
            .with_verification(true, outcome.otp_sent)
            .with_otp(outcome.otp);
    }
    HttpResponse::build(status).json(body)
}
