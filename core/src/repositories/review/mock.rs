//! In-memory review store

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::review::Review;
use crate::errors::DomainError;

use super::trait_::ReviewRepository;

/// Reviews keyed by booking id, which doubles as the uniqueness constraint
pub struct MockReviewRepository {
    reviews: Arc<RwLock<HashMap<Uuid, Review>>>,
}

impl MockReviewRepository {
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    async fn newest_first<F>(&self, predicate: F) -> Vec<Review>
    where
        F: Fn(&Review) -> bool,
    {
        let reviews = self.reviews.read().await;
        let mut matched: Vec<Review> = reviews.values().filter(|r| predicate(r)).cloned().collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matched
    }
}

impl Default for MockReviewRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReviewRepository for MockReviewRepository {
    async fn create(&self, review: Review) -> Result<Review, DomainError> {
        let mut reviews = self.reviews.write().await;
        if reviews.contains_key(&review.booking_id) {
            return Err(DomainError::conflict("Review already exists for this booking"));
        }
        reviews.insert(review.booking_id, review.clone());
        Ok(review)
    }

    async fn find_by_booking(&self, booking_id: Uuid) -> Result<Option<Review>, DomainError> {
        Ok(self.reviews.read().await.get(&booking_id).cloned())
    }

    async fn list_by_guider(&self, guider_id: Uuid) -> Result<Vec<Review>, DomainError> {
        Ok(self.newest_first(|r| r.guider_id == guider_id).await)
    }

    async fn list_by_traveler(&self, traveler_id: Uuid) -> Result<Vec<Review>, DomainError> {
        Ok(self.newest_first(|r| r.traveler_id == traveler_id).await)
    }

    async fn ratings_for_guider(&self, guider_id: Uuid) -> Result<Vec<u8>, DomainError> {
        let reviews = self.reviews.read().await;
        Ok(reviews
            .values()
            .filter(|r| r.guider_id == guider_id)
            .map(|r| r.rating)
            .collect())
    }
}
