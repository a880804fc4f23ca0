//! Shared-key guard for administrative routes

use actix_web::{web, Error, FromRequest, HttpRequest};
use constant_time_eq::constant_time_eq;
use std::future::{ready, Ready};
use tm_core::errors::{AuthError, DomainError};

use crate::handlers::ApiError;
use crate::state::AppState;

/// Header carrying the administrative key
pub const ADMIN_KEY_HEADER: &str = "X-Admin-Key";

/// Proof that the request presented the configured admin key
///
/// Routes taking this extractor answer 403 while `ADMIN_API_KEY` is unset.
#[derive(Debug, Clone, Copy)]
pub struct AdminAccess;

fn check(req: &HttpRequest) -> Result<AdminAccess, ApiError> {
    let expected = req
        .app_data::<web::Data<AppState>>()
        .and_then(|state| state.config.auth.admin_api_key.clone())
        .ok_or_else(|| DomainError::forbidden("Admin access is disabled"))?;

    let presented = req
        .headers()
        .get(ADMIN_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or(AuthError::AuthenticationRequired)
        .map_err(DomainError::from)?;

    if constant_time_eq(presented.as_bytes(), expected.as_bytes()) {
        Ok(AdminAccess)
    } else {
        tracing::warn!(path = req.path(), event = "admin_key_rejected", "Invalid admin key");
        Err(DomainError::forbidden("Admin access denied").into())
    }
}

impl FromRequest for AdminAccess {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        ready(check(req).map_err(Error::from))
    }
}
