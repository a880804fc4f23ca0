//! Review routes; listing is public, posting needs a traveler session

use actix_web::{web, HttpResponse};
use tm_core::domain::entities::account::AccountKind;
use tm_shared::ApiResponse;
use uuid::Uuid;
use validator::Validate;

use crate::dto::CreateReviewRequest;
use crate::handlers::ApiError;
use crate::middleware::{AuthContext, JwtAuth};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/reviews")
            .route("", web::post().to(create_review).wrap(JwtAuth::new()))
            .route("/guider/{id}", web::get().to(list_for_guider))
            .route("/guide/{id}", web::get().to(list_for_guider))
            .route("/traveler/{id}", web::get().to(list_for_traveler))
            .route("/tourist/{id}", web::get().to(list_for_traveler)),
    );
}

/// Handler for POST /api/v1/reviews
pub async fn create_review(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse, ApiError> {
    auth.require_kind(AccountKind::Traveler, "Only travelers can leave reviews")?;
    let request = request.into_inner();
    request.validate()?;

    let review = state
        .review_service
        .create_review(auth.account_id, request.into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_status(
        "Review created successfully",
        review,
        201,
    )))
}

pub async fn list_for_guider(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let reviews = state.review_service.list_by_guider(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Reviews retrieved successfully", reviews)))
}

pub async fn list_for_traveler(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let reviews = state.review_service.list_by_traveler(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Reviews retrieved successfully", reviews)))
}
