//! Booking repository interface.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::booking::{Booking, BookingRole, BookingStatus};
use crate::errors::DomainError;

/// Persistence for bookings. Bookings are never deleted.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError>;

    /// Bookings where the account is traveler or guider, newest first
    ///
    /// `role` narrows the match to one side of the booking.
    async fn list_for_account(
        &self,
        account_id: Uuid,
        role: Option<BookingRole>,
    ) -> Result<Vec<Booking>, DomainError>;

    /// Overwrite the status
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such booking
    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, DomainError>;

    /// Store the gateway reference and paid flag
    async fn record_payment(
        &self,
        id: Uuid,
        payment_ref: &str,
        is_paid: bool,
    ) -> Result<Booking, DomainError>;
}
