//! Bearer-token authentication for protected routes.
//!
//! [`JwtAuth`] wraps a route or scope. It resolves the `Authorization:
//! Bearer <token>` header through the account service, which checks the
//! signature and that the account still exists and is active. The resulting
//! [`AuthContext`] is stored in the request extensions for handlers to
//! extract.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use tm_core::domain::entities::account::{Account, AccountKind};
use tm_core::errors::{AuthError, DomainError};
use uuid::Uuid;

use crate::handlers::ApiError;
use crate::state::AppState;

/// The authenticated account behind a request
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub account_id: Uuid,
    pub kind: AccountKind,
    pub email: String,
}

impl AuthContext {
    pub fn from_account(account: &Account) -> Self {
        Self {
            account_id: account.id(),
            kind: account.kind(),
            email: account.email().to_string(),
        }
    }

    /// Reject accounts of the other kind with 403
    pub fn require_kind(&self, kind: AccountKind, message: &str) -> Result<(), ApiError> {
        if self.kind == kind {
            Ok(())
        } else {
            Err(DomainError::forbidden(message).into())
        }
    }
}

/// Authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let outcome = authenticate(&req).await;
            match outcome {
                Ok(context) => {
                    req.extensions_mut().insert(context);
                    service
                        .call(req)
                        .await
                        .map(ServiceResponse::map_into_left_body)
                }
                Err(err) => {
                    tracing::debug!(error = %err, path = req.path(), "Bearer token rejected");
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

/// Resolve the bearer token to an active account
async fn authenticate(req: &ServiceRequest) -> Result<AuthContext, ApiError> {
    let token = extract_bearer_token(req)
        .ok_or_else(|| DomainError::from(AuthError::AuthenticationRequired))?;

    let state = req
        .app_data::<web::Data<AppState>>()
        .cloned()
        .ok_or_else(|| DomainError::internal("Application state missing"))?;

    let account = state.account_service.authenticate_session(&token).await?;
    Ok(AuthContext::from_account(&account))
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Extractor for routes wrapped in [`JwtAuth`]
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(DomainError::from(AuthError::AuthenticationRequired)).into());

        ready(result)
    }
}
