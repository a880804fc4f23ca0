//! In-memory booking store

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingRole, BookingStatus};
use crate::errors::DomainError;

use super::trait_::BookingRepository;

pub struct MockBookingRepository {
    bookings: Arc<RwLock<HashMap<Uuid, Booking>>>,
}

impl MockBookingRepository {
    pub fn new() -> Self {
        Self {
            bookings: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockBookingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        bookings.insert(booking.id, booking.clone());
        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        Ok(self.bookings.read().await.get(&id).cloned())
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
        role: Option<BookingRole>,
    ) -> Result<Vec<Booking>, DomainError> {
        let bookings = self.bookings.read().await;
        let mut matched: Vec<Booking> = bookings
            .values()
            .filter(|b| match role {
                Some(BookingRole::Traveler) => b.traveler_id == account_id,
                Some(BookingRole::Guider) => b.guider_id == account_id,
                None => b.involves(account_id),
            })
            .cloned()
            .collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Booking"))?;
        booking.status = status;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }

    async fn record_payment(
        &self,
        id: Uuid,
        payment_ref: &str,
        is_paid: bool,
    ) -> Result<Booking, DomainError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .get_mut(&id)
            .ok_or_else(|| DomainError::not_found("Booking"))?;
        booking.payment_ref = Some(payment_ref.to_string());
        booking.is_paid = is_paid;
        booking.updated_at = Utc::now();
        Ok(booking.clone())
    }
}
