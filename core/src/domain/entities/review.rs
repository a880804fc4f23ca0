//! Review entity left by a traveler for the guider of a booking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// One review per booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub traveler_id: Uuid,
    pub guider_id: Uuid,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    pub fn new(
        booking_id: Uuid,
        traveler_id: Uuid,
        guider_id: Uuid,
        rating: u8,
        comment: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            booking_id,
            traveler_id,
            guider_id,
            rating,
            comment,
            created_at: Utc::now(),
        }
    }
}

pub fn is_valid_rating(rating: i64) -> bool {
    (i64::from(MIN_RATING)..=i64::from(MAX_RATING)).contains(&rating)
}

/// Arithmetic mean of the given ratings, 0.0 when there are none
pub fn average_rating(ratings: &[u8]) -> f64 {
    if ratings.is_empty() {
        return 0.0;
    }
    let sum: u32 = ratings.iter().map(|r| u32::from(*r)).sum();
    f64::from(sum) / ratings.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(is_valid_rating(1));
        assert!(is_valid_rating(5));
        assert!(!is_valid_rating(0));
        assert!(!is_valid_rating(6));
        assert!(!is_valid_rating(-3));
    }

    #[test]
    fn test_average_rating() {
        assert_eq!(average_rating(&[5, 4, 3]), 4.0);
        assert_eq!(average_rating(&[5, 4]), 4.5);
        assert_eq!(average_rating(&[]), 0.0);
    }
}
