//! MySQL implementation of the BookingRepository trait.

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;
use uuid::Uuid;

use tm_core::domain::entities::booking::{Booking, BookingRole, BookingStatus};
use tm_core::errors::DomainError;
use tm_core::repositories::BookingRepository;

use super::{column, parsed_column, query_error, uuid_column};

const BOOKING_COLUMNS: &str = "id, traveler_id, guider_id, place, start_date, duration_hours, \
     num_people, special_requests, price, currency, status, payment_ref, is_paid, created_at, \
     updated_at";

/// MySQL implementation of BookingRepository
pub struct MySqlBookingRepository {
    pool: MySqlPool,
}

impl MySqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_booking(row: &MySqlRow) -> Result<Booking, DomainError> {
        Ok(Booking {
            id: uuid_column(row, "id")?,
            traveler_id: uuid_column(row, "traveler_id")?,
            guider_id: uuid_column(row, "guider_id")?,
            place: column(row, "place")?,
            start_date: column(row, "start_date")?,
            duration_hours: column(row, "duration_hours")?,
            num_people: column(row, "num_people")?,
            special_requests: column(row, "special_requests")?,
            price: column(row, "price")?,
            currency: column(row, "currency")?,
            status: parsed_column(row, "status")?,
            payment_ref: column(row, "payment_ref")?,
            is_paid: column(row, "is_paid")?,
            created_at: column(row, "created_at")?,
            updated_at: column(row, "updated_at")?,
        })
    }

    async fn fetch_required(&self, id: Uuid) -> Result<Booking, DomainError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Booking"))
    }
}

#[async_trait]
impl BookingRepository for MySqlBookingRepository {
    async fn create(&self, booking: Booking) -> Result<Booking, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO bookings (
                id, traveler_id, guider_id, place, start_date, duration_hours, num_people,
                special_requests, price, currency, status, payment_ref, is_paid,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(booking.id.to_string())
        .bind(booking.traveler_id.to_string())
        .bind(booking.guider_id.to_string())
        .bind(&booking.place)
        .bind(booking.start_date)
        .bind(booking.duration_hours)
        .bind(booking.num_people)
        .bind(&booking.special_requests)
        .bind(booking.price)
        .bind(&booking.currency)
        .bind(booking.status.as_str())
        .bind(&booking.payment_ref)
        .bind(booking.is_paid)
        .bind(booking.created_at)
        .bind(booking.updated_at)
        .execute(&self.pool)
        .await
        .map_err(query_error("create booking"))?;

        Ok(booking)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, DomainError> {
        let query = format!("SELECT {} FROM bookings WHERE id = ?", BOOKING_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("find booking"))?;

        row.as_ref().map(Self::row_to_booking).transpose()
    }

    async fn list_for_account(
        &self,
        account_id: Uuid,
        role: Option<BookingRole>,
    ) -> Result<Vec<Booking>, DomainError> {
        let filter = match role {
            Some(BookingRole::Traveler) => "traveler_id = ?",
            Some(BookingRole::Guider) => "guider_id = ?",
            None => "(traveler_id = ? OR guider_id = ?)",
        };
        let query = format!(
            "SELECT {} FROM bookings WHERE {} ORDER BY created_at DESC",
            BOOKING_COLUMNS, filter
        );

        let id = account_id.to_string();
        let mut q = sqlx::query(&query).bind(id.clone());
        if role.is_none() {
            q = q.bind(id);
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("list bookings"))?;

        rows.iter().map(Self::row_to_booking).collect()
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, DomainError> {
        let result = sqlx::query("UPDATE bookings SET status = ?, updated_at = NOW(3) WHERE id = ?")
            .bind(status.as_str())
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(query_error("update booking status"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }
        self.fetch_required(id).await
    }

    async fn record_payment(
        &self,
        id: Uuid,
        payment_ref: &str,
        is_paid: bool,
    ) -> Result<Booking, DomainError> {
        let result = sqlx::query(
            "UPDATE bookings SET payment_ref = ?, is_paid = ?, updated_at = NOW(3) WHERE id = ?",
        )
        .bind(payment_ref)
        .bind(is_paid)
        .bind(id.to_string())
        .execute(&self.pool)
        .await
        .map_err(query_error("record booking payment"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Booking"));
        }
        self.fetch_required(id).await
    }
}
