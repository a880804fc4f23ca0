//! Review creation and rating aggregation

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::entities::review::{average_rating, is_valid_rating, Review};
use crate::errors::{DomainError, DomainResult, FieldViolation};
use crate::repositories::{AccountRepository, BookingRepository, ReviewRepository};

/// A traveler's review of a booking
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRequest {
    pub booking_id: Uuid,
    pub guider_id: Uuid,
    /// Raw client value, checked against the 1-5 range
    pub rating: i64,
    pub comment: Option<String>,
}

/// Review service owning the guider rating aggregate
pub struct ReviewService {
    review_repository: Arc<dyn ReviewRepository>,
    booking_repository: Arc<dyn BookingRepository>,
    account_repository: Arc<dyn AccountRepository>,
    /// One lock per guider so aggregate writes never interleave
    guider_locks: Mutex<HashMap<Uuid, Arc<Mutex<()>>>>,
}

impl ReviewService {
    pub fn new(
        review_repository: Arc<dyn ReviewRepository>,
        booking_repository: Arc<dyn BookingRepository>,
        account_repository: Arc<dyn AccountRepository>,
    ) -> Self {
        Self {
            review_repository,
            booking_repository,
            account_repository,
            guider_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Store a review and recompute the guider's mean rating
    ///
    /// This method:
    /// 1. Checks the rating range
    /// 2. Checks the booking exists and links this traveler and guider
    /// 3. Refuses a second review of the same booking, then persists it
    /// 4. Under the guider's lock, recomputes and stores the aggregate
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Rating outside 1-5
    /// * `DomainError::NotFound` - No such booking
    /// * `DomainError::Forbidden` - Booking belongs to another traveler or guider
    /// * `DomainError::Conflict` - Booking already reviewed
    pub async fn create_review(
        &self,
        traveler_id: Uuid,
        request: ReviewRequest,
    ) -> DomainResult<Review> {
        if !is_valid_rating(request.rating) {
            return Err(DomainError::invalid_fields(vec![FieldViolation::new(
                "rating",
                "Rating must be between 1 and 5",
            )]));
        }
        // In range, so the narrowing cannot fail
        let rating = u8::try_from(request.rating)
            .map_err(|_| DomainError::validation("Rating must be between 1 and 5"))?;

        let booking = self
            .booking_repository
            .find_by_id(request.booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))?;

        if booking.traveler_id != traveler_id || booking.guider_id != request.guider_id {
            return Err(DomainError::forbidden(
                "You can only review guides from your own bookings",
            ));
        }

        let comment = request
            .comment
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());
        let review = Review::new(
            booking.id,
            traveler_id,
            booking.guider_id,
            rating,
            comment,
        );

        let lock = self.guider_lock(booking.guider_id).await;
        let _guard = lock.lock().await;

        if self
            .review_repository
            .find_by_booking(booking.id)
            .await?
            .is_some()
        {
            return Err(DomainError::conflict("Review already exists for this booking"));
        }

        let review = self.review_repository.create(review).await?;
        self.refresh_rating(booking.guider_id).await?;

        tracing::info!(
            review_id = %review.id,
            booking_id = %review.booking_id,
            guider_id = %review.guider_id,
            rating = review.rating,
            event = "review_created",
            "Review created"
        );
        Ok(review)
    }

    /// Reviews about a guider, newest first
    pub async fn list_by_guider(&self, guider_id: Uuid) -> DomainResult<Vec<Review>> {
        self.review_repository.list_by_guider(guider_id).await
    }

    /// Reviews written by a traveler, newest first
    pub async fn list_by_traveler(&self, traveler_id: Uuid) -> DomainResult<Vec<Review>> {
        self.review_repository.list_by_traveler(traveler_id).await
    }

    async fn refresh_rating(&self, guider_id: Uuid) -> DomainResult<()> {
        let ratings = self.review_repository.ratings_for_guider(guider_id).await?;
        let rating = average_rating(&ratings);
        let total = u32::try_from(ratings.len()).unwrap_or(u32::MAX);

        self.account_repository
            .update_guider_rating(guider_id, rating, total)
            .await?;

        tracing::debug!(
            guider_id = %guider_id,
            rating,
            total_reviews = total,
            event = "guider_rating_updated",
            "Guider rating recomputed"
        );
        Ok(())
    }

    async fn guider_lock(&self, guider_id: Uuid) -> Arc<Mutex<()>> {
        let mut locks = self.guider_locks.lock().await;
        locks
            .entry(guider_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
