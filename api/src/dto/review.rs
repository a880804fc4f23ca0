use serde::{Deserialize, Serialize};
use tm_core::services::review::ReviewRequest;
use uuid::Uuid;
use validator::Validate;

/// Rating range checks happen in the review service
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewRequest {
    pub booking_id: Uuid,
    #[serde(alias = "guideId")]
    pub guider_id: Uuid,
    pub rating: i64,
    #[validate(length(max = 2000, message = "Comment is too long"))]
    pub comment: Option<String>,
}

impl From<CreateReviewRequest> for ReviewRequest {
    fn from(req: CreateReviewRequest) -> Self {
        Self {
            booking_id: req.booking_id,
            guider_id: req.guider_id,
            rating: req.rating,
            comment: req.comment,
        }
    }
}
