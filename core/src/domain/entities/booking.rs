//! Booking entity, its status machine, and price derivation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::account::RateSchedule;

/// Hours that count as one day when pricing by `price_per_day`
pub const HOURS_PER_DAY: u32 = 8;

/// Hourly rate used when a guider publishes no prices
pub const DEFAULT_HOURLY_RATE: f64 = 500.0;

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Accepted,
    Rejected,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Accepted => "accepted",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Edges of the strict transition graph
    ///
    /// `pending -> {accepted, rejected, cancelled}`,
    /// `accepted -> {completed, cancelled}`. Other states are terminal.
    pub fn can_transition_to(&self, next: BookingStatus) -> bool {
        use BookingStatus::*;
        matches!(
            (self, next),
            (Pending, Accepted)
                | (Pending, Rejected)
                | (Pending, Cancelled)
                | (Accepted, Completed)
                | (Accepted, Cancelled)
        )
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(BookingStatus::Pending),
            "accepted" | "confirmed" => Ok(BookingStatus::Accepted),
            "rejected" => Ok(BookingStatus::Rejected),
            "completed" => Ok(BookingStatus::Completed),
            "cancelled" | "canceled" => Ok(BookingStatus::Cancelled),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Which side of a booking an account is listed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingRole {
    Traveler,
    Guider,
}

impl std::str::FromStr for BookingRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "traveler" | "traveller" | "tourist" => Ok(BookingRole::Traveler),
            "guider" | "guide" => Ok(BookingRole::Guider),
            _ => Err(format!("Invalid booking role: {}", s)),
        }
    }
}

/// A traveler's reservation of a guider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub traveler_id: Uuid,
    pub guider_id: Uuid,
    pub place: String,
    pub start_date: DateTime<Utc>,
    pub duration_hours: u32,
    pub num_people: u32,
    pub special_requests: Option<String>,
    /// Fixed at creation
    pub price: f64,
    pub currency: String,
    pub status: BookingStatus,
    pub payment_ref: Option<String>,
    pub is_paid: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Creates a pending, unpaid booking
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        traveler_id: Uuid,
        guider_id: Uuid,
        place: String,
        start_date: DateTime<Utc>,
        duration_hours: u32,
        num_people: u32,
        special_requests: Option<String>,
        price: f64,
        currency: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            traveler_id,
            guider_id,
            place,
            start_date,
            duration_hours,
            num_people,
            special_requests,
            price,
            currency,
            status: BookingStatus::Pending,
            payment_ref: None,
            is_paid: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the account is the traveler or the guider of this booking
    pub fn involves(&self, account_id: Uuid) -> bool {
        self.traveler_id == account_id || self.guider_id == account_id
    }
}

/// Derive a booking price from a rate schedule
///
/// Precedence: hourly rate, then daily rate per started 8-hour block, then a
/// flat tour price, then `default_hourly_rate` per hour.
pub fn compute_price(rates: &RateSchedule, duration_hours: u32, default_hourly_rate: f64) -> f64 {
    let hours = f64::from(duration_hours);
    if let Some(per_hour) = rates.price_per_hour {
        per_hour * hours
    } else if let Some(per_day) = rates.price_per_day {
        per_day * f64::from(duration_hours.div_ceil(HOURS_PER_DAY))
    } else if let Some(per_tour) = rates.price_per_tour {
        per_tour
    } else {
        default_hourly_rate * hours
    }
}
