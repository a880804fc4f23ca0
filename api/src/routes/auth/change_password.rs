use actix_web::{web, HttpResponse};
use tm_shared::ApiResponse;
use validator::Validate;

use crate::dto::ChangePasswordRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Handler for POST /api/v1/auth/change-password (bearer)
pub async fn change_password(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, ApiError> {
    request.validate()?;

    state
        .account_service
        .change_password(
            auth.kind,
            auth.account_id,
            &request.old_password,
            &request.new_password,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::success_with_status(
        "Password changed successfully",
        (),
        200,
    )))
}
