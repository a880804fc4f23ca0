//! Conversion of domain failures into the JSON response envelope.
//!
//! Every handler returns `Result<HttpResponse, ApiError>`; actix renders the
//! error side through [`ResponseError`]. Unexpected failures are logged with
//! full detail and answered with a generic message. The detail is echoed in
//! the `error` field only when diagnostics are enabled for the environment.

use actix_web::{
    error::{JsonPayloadError, PathError, QueryPayloadError},
    http::StatusCode,
    HttpRequest, HttpResponse, ResponseError,
};
use once_cell::sync::OnceCell;
use std::fmt;
use tm_core::errors::{DomainError, ErrorKind, FieldViolation};
use tm_shared::{ApiResponse, Environment, FieldError};
use validator::{ValidationErrors, ValidationErrorsKind};

static EXPOSE_DIAGNOSTICS: OnceCell<bool> = OnceCell::new();

/// Decide once per process whether error bodies may carry diagnostics
pub fn configure_diagnostics(environment: Environment) {
    let _ = EXPOSE_DIAGNOSTICS.set(environment.exposes_diagnostics());
}

fn diagnostics_enabled() -> bool {
    EXPOSE_DIAGNOSTICS.get().copied().unwrap_or(false)
}

/// Error type returned by every handler
#[derive(Debug)]
pub struct ApiError(DomainError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self(DomainError::validation(message))
    }

    pub fn domain(&self) -> &DomainError {
        &self.0
    }

    fn public_message(&self) -> String {
        match &self.0 {
            DomainError::ExternalService { service, .. } => {
                format!("{} is unavailable, please try again later", service)
            }
            err if err.kind() == ErrorKind::Internal => String::from("Internal server error"),
            err => err.to_string(),
        }
    }

    fn field_errors(&self) -> Vec<FieldError> {
        self.0
            .field_violations()
            .iter()
            .map(|v| FieldError::new(v.field.clone(), v.message.clone()))
            .collect()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self(DomainError::invalid_fields(violations_from(&errors)))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => match self.0 {
                DomainError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            tracing::debug!(status = status.as_u16(), error = %self.0, "Request rejected");
        }

        let mut body: ApiResponse<()> =
            ApiResponse::error(self.public_message(), status.as_u16()).with_errors(self.field_errors());
        if status.is_server_error() && diagnostics_enabled() {
            body = body.with_diagnostic(self.0.to_string());
        }

        HttpResponse::build(status).json(body)
    }
}

/// Flatten validator output into camelCase field violations
fn violations_from(errors: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations = Vec::new();
    for (field, kind) in errors.errors() {
        let name = camel_case(field);
        match kind {
            ValidationErrorsKind::Field(failures) => {
                for failure in failures {
                    let message = failure
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{} is invalid", name));
                    violations.push(FieldViolation::new(name.clone(), message));
                }
            }
            ValidationErrorsKind::Struct(nested) => {
                for v in violations_from(nested) {
                    violations.push(FieldViolation::new(format!("{}.{}", name, v.field), v.message));
                }
            }
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    for v in violations_from(nested) {
                        violations.push(FieldViolation::new(
                            format!("{}[{}].{}", name, index, v.field),
                            v.message,
                        ));
                    }
                }
            }
        }
    }
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Malformed JSON bodies answer with the standard 400 envelope
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid request body: {}", err)).into()
}

pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid path parameter: {}", err)).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::bad_request(format!("Invalid query string: {}", err)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use tm_core::errors::AuthError;
    use validator::Validate;

    async fn body_of(err: ApiError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::from(AuthError::InvalidCredentials), StatusCode::UNAUTHORIZED),
            (DomainError::forbidden("no"), StatusCode::FORBIDDEN),
            (DomainError::not_found("Booking"), StatusCode::NOT_FOUND),
            (DomainError::conflict("User already exists"), StatusCode::CONFLICT),
            (DomainError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::Database("gone".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (DomainError::external("Payment gateway", "timeout"), StatusCode::BAD_GATEWAY),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError::from(err).status_code(), status);
        }
    }

    #[actix_web::test]
    async fn test_envelope_carries_field_errors() {
        let err = ApiError::from(DomainError::invalid_fields(vec![FieldViolation::new(
            "newPassword",
            "New password is required",
        )]));
        let body = body_of(err).await;

        assert_eq!(body["success"], false);
        assert_eq!(body["statusCode"], 400);
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(body["errors"][0]["field"], "newPassword");
    }

    #[actix_web::test]
    async fn test_internal_detail_is_not_the_message() {
        let body = body_of(ApiError::from(DomainError::Database("pool timed out".into()))).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["statusCode"], 500);
    }

    #[actix_web::test]
    async fn test_auth_message_is_rendered_verbatim() {
        let body = body_of(ApiError::from(DomainError::from(AuthError::InvalidOrExpiredOtp))).await;
        assert_eq!(body["message"], "Invalid or expired OTP");
        assert!(body.get("errors").is_none());
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(length(min = 1, message = "Booking id is required"))]
        booking_id: String,
    }

    #[test]
    fn test_validator_fields_become_camel_case() {
        let errors = Sample {
            booking_id: String::new(),
        }
        .validate()
        .unwrap_err();
        let err = ApiError::from(errors);
        let fields = err.domain().field_violations();

        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].field, "bookingId");
        assert_eq!(fields[0].message, "Booking id is required");
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("razorpay_payment_id"), "razorpayPaymentId");
        assert_eq!(camel_case("email"), "email");
    }
}
