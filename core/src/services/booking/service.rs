//! Booking creation, status transitions and party-scoped queries

use chrono::{DateTime, Utc};
use std::sync::Arc;
use tm_shared::validation::not_blank;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountKind, Guider};
use crate::domain::entities::booking::{compute_price, Booking, BookingRole, BookingStatus};
use crate::errors::{DomainError, DomainResult, FieldViolation};
use crate::repositories::{AccountRepository, BookingRepository};

use super::config::BookingServiceConfig;

/// What a traveler asks for when booking a guider
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub guider_id: Uuid,
    pub place: String,
    pub start_date: DateTime<Utc>,
    pub duration_hours: u32,
    pub num_people: u32,
    pub special_requests: Option<String>,
}

impl BookingRequest {
    fn violations(&self) -> Vec<FieldViolation> {
        let mut violations = Vec::new();
        if !not_blank(&self.place) {
            violations.push(FieldViolation::new("place", "Place is required"));
        }
        if self.duration_hours < 1 {
            violations.push(FieldViolation::new(
                "durationHours",
                "Duration must be at least 1 hour",
            ));
        }
        if self.num_people < 1 {
            violations.push(FieldViolation::new(
                "numPeople",
                "Number of people must be at least 1",
            ));
        }
        violations
    }
}

/// Booking service owning the booking lifecycle
pub struct BookingService {
    booking_repository: Arc<dyn BookingRepository>,
    account_repository: Arc<dyn AccountRepository>,
    config: BookingServiceConfig,
}

impl BookingService {
    pub fn new(
        booking_repository: Arc<dyn BookingRepository>,
        account_repository: Arc<dyn AccountRepository>,
        config: BookingServiceConfig,
    ) -> Self {
        Self {
            booking_repository,
            account_repository,
            config,
        }
    }

    /// Create a pending, unpaid booking priced from the guider's rates
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Blank place, zero hours or zero people
    /// * `DomainError::NotFound` - Guider missing, inactive or not approved
    pub async fn create(&self, traveler_id: Uuid, request: BookingRequest) -> DomainResult<Booking> {
        let violations = request.violations();
        if !violations.is_empty() {
            return Err(DomainError::invalid_fields(violations));
        }

        let guider = self.bookable_guider(request.guider_id).await?;
        let price = compute_price(
            &guider.rates,
            request.duration_hours,
            self.config.default_hourly_rate,
        );

        let booking = Booking::new(
            traveler_id,
            guider.base.id,
            request.place.trim().to_string(),
            request.start_date,
            request.duration_hours,
            request.num_people,
            request.special_requests,
            price,
            guider.currency.clone(),
        );
        let booking = self.booking_repository.create(booking).await?;

        tracing::info!(
            booking_id = %booking.id,
            traveler_id = %traveler_id,
            guider_id = %booking.guider_id,
            price = booking.price,
            event = "booking_created",
            "Booking created"
        );
        Ok(booking)
    }

    /// Change a booking's status on behalf of its guider
    ///
    /// # Errors
    ///
    /// * `DomainError::NotFound` - No such booking
    /// * `DomainError::Forbidden` - Acting account is not the booking's guider
    /// * `DomainError::Validation` - Strict policy rejects the transition
    pub async fn set_status(
        &self,
        booking_id: Uuid,
        status: BookingStatus,
        acting_account_id: Uuid,
    ) -> DomainResult<Booking> {
        let booking = self.require_booking(booking_id).await?;

        if booking.guider_id != acting_account_id {
            tracing::warn!(
                booking_id = %booking_id,
                account_id = %acting_account_id,
                event = "booking_status_forbidden",
                "Non-guider attempted a status change"
            );
            return Err(DomainError::forbidden("Only guide can update booking status"));
        }

        if !self.config.transition_policy.allows(booking.status, status) {
            return Err(DomainError::validation(format!(
                "Cannot change booking status from {} to {}",
                booking.status, status
            )));
        }

        let updated = self
            .booking_repository
            .update_status(booking_id, status)
            .await?;

        tracing::info!(
            booking_id = %booking_id,
            from = booking.status.as_str(),
            to = status.as_str(),
            event = "booking_status_changed",
            "Booking status changed"
        );
        Ok(updated)
    }

    /// Bookings the account takes part in, newest first
    pub async fn list_for_account(
        &self,
        account_id: Uuid,
        role: Option<BookingRole>,
    ) -> DomainResult<Vec<Booking>> {
        self.booking_repository
            .list_for_account(account_id, role)
            .await
    }

    /// A single booking, visible only to its traveler and guider
    pub async fn get_by_id(&self, booking_id: Uuid, acting_account_id: Uuid) -> DomainResult<Booking> {
        let booking = self.require_booking(booking_id).await?;
        if !booking.involves(acting_account_id) {
            return Err(DomainError::forbidden("Access denied"));
        }
        Ok(booking)
    }

    /// Remember the gateway order created for a booking
    pub(crate) async fn attach_payment_order(
        &self,
        booking_id: Uuid,
        order_id: &str,
    ) -> DomainResult<Booking> {
        self.booking_repository
            .record_payment(booking_id, order_id, false)
            .await
    }

    /// Record a verified payment
    pub(crate) async fn mark_paid(&self, booking_id: Uuid, payment_ref: &str) -> DomainResult<Booking> {
        let booking = self
            .booking_repository
            .record_payment(booking_id, payment_ref, true)
            .await?;
        tracing::info!(
            booking_id = %booking_id,
            event = "booking_paid",
            "Booking marked as paid"
        );
        Ok(booking)
    }

    async fn require_booking(&self, booking_id: Uuid) -> DomainResult<Booking> {
        self.booking_repository
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }

    async fn bookable_guider(&self, guider_id: Uuid) -> DomainResult<Guider> {
        match self
            .account_repository
            .find_by_id(AccountKind::Guider, guider_id)
            .await?
        {
            Some(Account::Guider(guider)) if guider.is_bookable() => Ok(guider),
            _ => Err(DomainError::not_found("Guide")),
        }
    }
}
