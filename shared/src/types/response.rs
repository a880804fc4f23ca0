//! API response types and wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single field-level validation message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Standard API response envelope
///
/// Every endpoint answers with this shape. Authentication endpoints
/// additionally fill `token`, `requires_verification`, `otp_sent` and, when
/// deterministic codes are enabled, `otp`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,

    /// Human-readable outcome
    pub message: String,

    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    /// Field-level errors (present on validation failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,

    /// Diagnostic detail for unexpected failures, never set in production
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Session token
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_verification: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_sent: Option<bool>,

    /// Echoed passcode in deterministic mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,

    /// HTTP status code mirrored in the body
    pub status_code: u16,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::success_with_status(message, data, 200)
    }

    /// Create a successful response carrying a non-200 status (e.g. 201)
    pub fn success_with_status(message: impl Into<String>, data: T, status_code: u16) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            error: None,
            token: None,
            requires_verification: None,
            otp_sent: None,
            otp: None,
            status_code,
            timestamp: Utc::now(),
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            errors: None,
            error: None,
            token: None,
            requires_verification: None,
            otp_sent: None,
            otp: None,
            status_code,
            timestamp: Utc::now(),
        }
    }

    /// Attach field-level errors
    pub fn with_errors(mut self, errors: Vec<FieldError>) -> Self {
        if !errors.is_empty() {
            self.errors = Some(errors);
        }
        self
    }

    /// Attach diagnostic detail
    pub fn with_diagnostic(mut self, detail: impl Into<String>) -> Self {
        self.error = Some(detail.into());
        self
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_verification(mut self, requires_verification: bool, otp_sent: bool) -> Self {
        self.requires_verification = Some(requires_verification);
        self.otp_sent = Some(otp_sent);
        self
    }

    pub fn with_otp(mut self, otp: Option<String>) -> Self {
        self.otp = otp;
        self
    }

    /// Check if the response is successful
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Extract the data, consuming the response
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let response = ApiResponse::success("ok", json!({"id": 1}))
            .with_token("abc")
            .with_verification(false, false);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["statusCode"], 200);
        assert_eq!(value["token"], "abc");
        assert_eq!(value["requiresVerification"], false);
        assert!(value.get("errors").is_none());
        assert!(value.get("otp").is_none());
    }

    #[test]
    fn test_error_envelope_with_fields() {
        let response: ApiResponse<()> = ApiResponse::error("Validation failed", 400)
            .with_errors(vec![FieldError::new("newPassword", "New password is required")]);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["errors"][0]["field"], "newPassword");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_empty_field_errors_are_omitted() {
        let response: ApiResponse<()> = ApiResponse::error("x", 400).with_errors(vec![]);
        assert!(response.errors.is_none());
    }
}
