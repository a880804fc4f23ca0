use serde::{Deserialize, Serialize};
use tm_core::domain::entities::account::ApprovalStatus;
use tm_core::errors::{DomainError, FieldViolation};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountStatusRequest {
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuiderApprovalRequest {
    pub status: String,
}

impl GuiderApprovalRequest {
    pub fn status(&self) -> Result<ApprovalStatus, DomainError> {
        self.status.parse().map_err(|_| {
            DomainError::invalid_fields(vec![FieldViolation::new(
                "status",
                "Status must be pending, approved or rejected",
            )])
        })
    }
}
