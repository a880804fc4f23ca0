use actix_web::{web, HttpResponse};
use tm_shared::ApiResponse;

use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for GET /api/v1/auth/me (bearer)
pub async fn me(state: web::Data<AppState>, auth: AuthContext) -> Result<HttpResponse, ApiError> {
    let profile = state
        .account_service
        .get_profile(auth.kind, auth.account_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success("Profile retrieved successfully", profile)))
}
