//! Domain entities representing core business objects.

pub mod account;
pub mod booking;
pub mod otp;
pub mod review;
pub mod token;

// Re-export commonly used types
pub use account::{
    Account, AccountBase, AccountKind, AccountProfile, ApprovalStatus, Credentialed, Guider,
    GuiderProfile, GuiderType, RateSchedule, Traveler, TravelerProfile,
};
pub use booking::{compute_price, Booking, BookingRole, BookingStatus, HOURS_PER_DAY};
pub use otp::{OtpPurpose, OtpRecord, DEFAULT_OTP_EXPIRATION_MINUTES, OTP_LENGTH};
pub use review::{average_rating, is_valid_rating, Review, MAX_RATING, MIN_RATING};
pub use token::Claims;
