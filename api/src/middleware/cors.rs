//! CORS configuration for browser clients.
//!
//! Outside production any origin is accepted. In production only the
//! origins listed in `CORS_ALLOWED_ORIGINS` are; with none listed,
//! cross-origin requests are refused.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use tm_shared::config::{Environment, ServerConfig};

const PREFLIGHT_MAX_AGE: usize = 3600;

fn allowed_methods() -> Vec<Method> {
    vec![
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::PATCH,
        Method::DELETE,
        Method::OPTIONS,
    ]
}

/// Creates a CORS middleware instance for the environment
pub fn create_cors(server: &ServerConfig, environment: Environment) -> Cors {
    let cors = Cors::default()
        .allowed_methods(allowed_methods())
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::HeaderName::from_static("x-admin-key"),
            header::HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(PREFLIGHT_MAX_AGE);

    if !environment.is_production() && server.cors_allowed_origins.is_empty() {
        tracing::info!("Configuring permissive CORS for {}", environment);
        return cors.allow_any_origin().supports_credentials();
    }

    if server.cors_allowed_origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS is empty, cross-origin requests will be refused");
    }

    server
        .cors_allowed_origins
        .iter()
        .fold(cors, |cors, origin| {
            tracing::info!("Adding allowed origin: {}", origin);
            cors.allowed_origin(origin)
        })
        .supports_credentials()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, web, App, HttpResponse};

    async fn preflight(cors: Cors, origin: &str) -> StatusCode {
        let app = test::init_service(
            App::new()
                .wrap(cors)
                .route("/ping", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri("/ping")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_development_allows_any_origin() {
        let cors = create_cors(&ServerConfig::default(), Environment::Development);
        assert_eq!(preflight(cors, "http://localhost:5173").await, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_production_honours_allow_list() {
        let server = ServerConfig {
            cors_allowed_origins: vec!["https://app.tourmate.example".to_string()],
            ..ServerConfig::default()
        };
        let allowed = create_cors(&server, Environment::Production);
        assert_eq!(
            preflight(allowed, "https://app.tourmate.example").await,
            StatusCode::OK
        );

        let refused = create_cors(&server, Environment::Production);
        assert_ne!(preflight(refused, "https://evil.example").await, StatusCode::OK);
    }
}
