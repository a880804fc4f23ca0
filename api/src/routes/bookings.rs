//! Booking routes, all behind bearer authentication

use actix_web::{web, HttpResponse};
use tm_core::domain::entities::account::AccountKind;
use tm_shared::ApiResponse;
use uuid::Uuid;
use validator::Validate;

use crate::dto::{BookingListQuery, CreateBookingRequest, UpdateBookingStatusRequest};
use crate::handlers::ApiError;
use crate::middleware::{AuthContext, JwtAuth};
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings")
            .wrap(JwtAuth::new())
            .route("", web::post().to(create_booking))
            .route("", web::get().to(list_bookings))
            .route("/{id}", web::get().to(get_booking))
            .route("/{id}/status", web::patch().to(update_status)),
    );
}

/// Handler for POST /api/v1/bookings
///
/// Only travelers book. The price is fixed here from the guider's rates.
pub async fn create_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    request: web::Json<CreateBookingRequest>,
) -> Result<HttpResponse, ApiError> {
    auth.require_kind(AccountKind::Traveler, "Only travelers can create bookings")?;
    let request = request.into_inner();
    request.validate()?;

    let booking = state
        .booking_service
        .create(auth.account_id, request.into())
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success_with_status(
        "Booking created successfully",
        booking,
        201,
    )))
}

/// Handler for GET /api/v1/bookings?role=traveler|guider
pub async fn list_bookings(
    state: web::Data<AppState>,
    auth: AuthContext,
    query: web::Query<BookingListQuery>,
) -> Result<HttpResponse, ApiError> {
    let role = query.role()?;
    let bookings = state
        .booking_service
        .list_for_account(auth.account_id, role)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Bookings retrieved successfully",
        bookings,
    )))
}

/// Handler for GET /api/v1/bookings/{id}
pub async fn get_booking(
    state: web::Data<AppState>,
    auth: AuthContext,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let booking = state
        .booking_service
        .get_by_id(id.into_inner(), auth.account_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Booking retrieved successfully",
        booking,
    )))
}

/// Handler for PATCH /api/v1/bookings/{id}/status
///
/// The service rejects anyone but the booking's guider.
pub async fn update_status(
    state: web::Data<AppState>,
    auth: AuthContext,
    id: web::Path<Uuid>,
    request: web::Json<UpdateBookingStatusRequest>,
) -> Result<HttpResponse, ApiError> {
    let status = request.status()?;
    let booking = state
        .booking_service
        .set_status(id.into_inner(), status, auth.account_id)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Booking status updated successfully",
        booking,
    )))
}
