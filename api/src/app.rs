//! Application factory
//!
//! Builds the actix `App` around a shared [`AppState`]; the binary and the
//! integration tests go through the same function.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tm_shared::ApiResponse;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::{json_error_handler, path_error_handler, query_error_handler};
use crate::middleware::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    let cors = create_cors(&app_state.config.server, app_state.config.environment);

    App::new()
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .app_data(web::PathConfig::default().error_handler(path_error_handler))
        .app_data(web::QueryConfig::default().error_handler(query_error_handler))
        .wrap(cors)
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(routes::health::health_check))
        .service(web::scope("/api/v1").configure(routes::configure))
        .default_service(web::route().to(not_found))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::error(
        "The requested resource was not found",
        404,
    ))
}
