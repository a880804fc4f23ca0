//! Review repository interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Persist a review
    ///
    /// # Errors
    /// * `DomainError::Conflict` - The booking already has a review
    async fn create(&self, review: Review) -> Result<Review, DomainError>;

    /// The review left on a booking, if any
    async fn find_by_booking(&self, booking_id: Uuid) -> Result<Option<Review>, DomainError>;

    /// Newest first
    async fn list_by_guider(&self, guider_id: Uuid) -> Result<Vec<Review>, DomainError>;

    /// Newest first
    async fn list_by_traveler(&self, traveler_id: Uuid) -> Result<Vec<Review>, DomainError>;

    /// Every rating currently recorded for the guider
    async fn ratings_for_guider(&self, guider_id: Uuid) -> Result<Vec<u8>, DomainError>;
}
