//! Account moderation behind the admin key

use actix_web::{web, HttpResponse};
use tm_shared::ApiResponse;
use uuid::Uuid;

use crate::dto::{AccountStatusRequest, GuiderApprovalRequest};
use crate::handlers::ApiError;
use crate::middleware::AdminAccess;
use crate::state::AppState;

use super::auth::parse_kind;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .route("/guiders/{id}/approval", web::patch().to(set_guider_approval))
            .route("/{kind}/{id}/status", web::patch().to(set_account_status)),
    );
}

/// Handler for PATCH /api/v1/admin/{kind}/{id}/status
pub async fn set_account_status(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    path: web::Path<(String, Uuid)>,
    request: web::Json<AccountStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let (kind, id) = path.into_inner();
    let kind = parse_kind(&kind)?;

    let profile = state
        .account_service
        .set_active(kind, id, request.is_active)
        .await?;

    tracing::info!(account_id = %id, kind = %kind, active = request.is_active, event = "account_status_changed", "Account status changed by admin");
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "User status updated successfully",
        profile,
    )))
}

/// Handler for PATCH /api/v1/admin/guiders/{id}/approval
pub async fn set_guider_approval(
    _admin: AdminAccess,
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<GuiderApprovalRequest>,
) -> Result<HttpResponse, ApiError> {
    let status = request.status()?;
    let guider = state
        .account_service
        .set_guider_approval(id.into_inner(), status)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Guide approval updated successfully",
        guider,
    )))
}
