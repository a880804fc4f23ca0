//! Helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::{
    http::{header, StatusCode},
    test, web,
};
use serde_json::{json, Value};
use tm_api::{create_app, AppState};
use tm_infra::email::MockEmailService;
use tm_shared::{AppConfig, Environment};

pub const ADMIN_KEY: &str = "test-admin-key";
pub const PAYMENT_SECRET: &str = "test_key_secret";
pub const DEV_OTP: &str = "123456";

/// Development defaults with a fast bcrypt cost and an admin key
pub fn test_config() -> AppConfig {
    let mut config = AppConfig::for_environment(Environment::Development);
    config.auth.bcrypt_cost = 4;
    config.auth.admin_api_key = Some(ADMIN_KEY.to_string());
    config.payment.key_id = "rzp_test_key".to_string();
    config.payment.key_secret = PAYMENT_SECRET.to_string();
    config.otp.sweep_enabled = false;
    config
}

/// In-memory application plus the outbox of its mailer
///
/// Every call builds a fresh service over the same state, so data written by
/// one request is visible to the next.
pub struct TestApp {
    pub state: web::Data<AppState>,
    pub mailer: Arc<MockEmailService>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    pub fn with_config(config: AppConfig) -> Self {
        let (state, mailer) = AppState::in_memory(&config);
        Self {
            state: web::Data::new(state),
            mailer,
        }
    }

    /// Send a request and decode the JSON envelope
    pub async fn call(&self, req: test::TestRequest) -> (StatusCode, Value) {
        let app = test::init_service(create_app(self.state.clone())).await;
        let res = test::call_service(&app, req.to_request()).await;
        let status = res.status();
        let bytes = test::read_body(res).await;
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.call(with_bearer(test::TestRequest::get().uri(uri), token))
            .await
    }

    pub async fn post(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.call(with_bearer(
            test::TestRequest::post().uri(uri).set_json(body),
            token,
        ))
        .await
    }

    pub async fn patch(&self, uri: &str, body: Value, token: Option<&str>) -> (StatusCode, Value) {
        self.call(with_bearer(
            test::TestRequest::patch().uri(uri).set_json(body),
            token,
        ))
        .await
    }

    pub async fn admin_patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.call(
            test::TestRequest::patch()
                .uri(uri)
                .insert_header(("X-Admin-Key", ADMIN_KEY))
                .set_json(body),
        )
        .await
    }

    /// Register and verify an account, returning `(id, token)`
    pub async fn onboard(&self, kind: &str, body: Value) -> (String, String) {
        let email = body["email"].as_str().unwrap_or_default().to_string();

        let (status, registered) = self
            .post(&format!("/api/v1/auth/{}/register", kind), body, None)
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", registered);

        let (status, verified) = self
            .post(
                &format!("/api/v1/auth/{}/verify-otp", kind),
                json!({"email": email, "otp": DEV_OTP}),
                None,
            )
            .await;
        assert_eq!(status, StatusCode::OK, "verify failed: {}", verified);

        (
            verified["data"]["id"].as_str().unwrap_or_default().to_string(),
            verified["token"].as_str().unwrap_or_default().to_string(),
        )
    }

    pub async fn traveler(&self, email: &str) -> (String, String) {
        self.onboard("traveler", traveler_body(email)).await
    }

    /// Onboard a guider and approve them so they can be booked
    pub async fn approved_guider(&self, email: &str, price_per_hour: f64) -> (String, String) {
        let (id, token) = self
            .onboard("guider", guider_body(email, price_per_hour))
            .await;
        let (status, body) = self
            .admin_patch(
                &format!("/api/v1/admin/guiders/{}/approval", id),
                json!({"status": "approved"}),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "approval failed: {}", body);
        (id, token)
    }

    /// Book `guider_id` for `hours`, returning the booking JSON
    pub async fn book(&self, token: &str, guider_id: &str, hours: u32) -> Value {
        let (status, body) = self
            .post(
                "/api/v1/bookings",
                booking_body(guider_id, hours),
                Some(token),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "booking failed: {}", body);
        body["data"].clone()
    }
}

fn with_bearer(req: test::TestRequest, token: Option<&str>) -> test::TestRequest {
    match token {
        Some(token) => req.insert_header((header::AUTHORIZATION, format!("Bearer {}", token))),
        None => req,
    }
}

pub fn traveler_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "wander123",
        "firstName": "Asha",
        "lastName": "Rao",
        "city": "Pune",
        "travelStyles": ["heritage"]
    })
}

pub fn guider_body(email: &str, price_per_hour: f64) -> Value {
    json!({
        "email": email,
        "password": "guide1234",
        "showcaseName": "Kochi Heritage Walks",
        "guiderType": "Professional",
        "city": "Kochi",
        "languages": ["English", "Malayalam"],
        "pricePerHour": price_per_hour
    })
}

pub fn booking_body(guider_id: &str, hours: u32) -> Value {
    json!({
        "guiderId": guider_id,
        "place": "Fort Kochi",
        "startDate": "2030-01-15T09:00:00Z",
        "durationHours": hours,
        "numPeople": 2,
        "specialRequests": "Vegetarian lunch stop"
    })
}
