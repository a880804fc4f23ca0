use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tm_core::domain::entities::booking::{BookingRole, BookingStatus};
use tm_core::errors::{DomainError, FieldViolation};
use tm_core::services::booking::BookingRequest;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(alias = "guideId")]
    pub guider_id: Uuid,
    #[validate(length(max = 200, message = "Place is too long"))]
    pub place: String,
    pub start_date: DateTime<Utc>,
    #[validate(range(max = 720, message = "Duration cannot exceed 720 hours"))]
    pub duration_hours: u32,
    #[validate(range(max = 100, message = "Number of people cannot exceed 100"))]
    pub num_people: u32,
    #[validate(length(max = 2000, message = "Special requests are too long"))]
    pub special_requests: Option<String>,
}

impl From<CreateBookingRequest> for BookingRequest {
    fn from(req: CreateBookingRequest) -> Self {
        Self {
            guider_id: req.guider_id,
            place: req.place,
            start_date: req.start_date,
            duration_hours: req.duration_hours,
            num_people: req.num_people,
            special_requests: req.special_requests,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    #[serde(alias = "userType")]
    pub role: Option<String>,
}

impl BookingListQuery {
    pub fn role(&self) -> Result<Option<BookingRole>, DomainError> {
        self.role
            .as_deref()
            .map(|raw| {
                raw.parse().map_err(|_| {
                    DomainError::invalid_fields(vec![FieldViolation::new(
                        "role",
                        "Role must be traveler or guider",
                    )])
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingStatusRequest {
    pub status: String,
}

impl UpdateBookingStatusRequest {
    pub fn status(&self) -> Result<BookingStatus, DomainError> {
        self.status.parse().map_err(|_| {
            DomainError::invalid_fields(vec![FieldViolation::new(
                "status",
                "Status must be one of pending, accepted, rejected, completed, cancelled",
            )])
        })
    }
}
