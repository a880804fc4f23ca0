//! Public guide directory

use actix_web::{web, HttpResponse};
use tm_core::repositories::GuiderSearch;
use tm_shared::ApiResponse;
use uuid::Uuid;

use crate::handlers::ApiError;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/guides")
            .route("", web::get().to(search_guides))
            .route("/{id}", web::get().to(get_guide)),
    );
}

/// Handler for GET /api/v1/guides?city=&minPrice=&maxPrice=&language=&page=&limit=
pub async fn search_guides(
    state: web::Data<AppState>,
    query: web::Query<GuiderSearch>,
) -> Result<HttpResponse, ApiError> {
    let page = state.directory_service.search(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Guides retrieved successfully", page)))
}

/// Handler for GET /api/v1/guides/{id}
pub async fn get_guide(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let guide = state.directory_service.get_guider(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Guide retrieved successfully", guide)))
}
