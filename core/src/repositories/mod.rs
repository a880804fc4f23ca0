//! Repository interfaces and their in-memory implementations.

pub mod account;
pub mod booking;
pub mod otp;
pub mod review;

pub use account::{AccountRepository, GuiderPage, GuiderSearch, MockAccountRepository};
pub use booking::{BookingRepository, MockBookingRepository};
pub use otp::{MockOtpRepository, OtpRepository};
pub use review::{MockReviewRepository, ReviewRepository};
