//! Request and response bodies, camelCase on the wire
//!
//! Validator rules here only bound the shape of a request. Business rules
//! such as password length or rating range belong to the core services.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod payment;
pub mod review;

pub use admin::{AccountStatusRequest, GuiderApprovalRequest};
pub use auth::{
    ChangePasswordRequest, GuiderRegisterRequest, LoginRequest, ResendOtpRequest,
    ResendOtpResponse, TravelerRegisterRequest, VerifyOtpRequest,
};
pub use booking::{BookingListQuery, CreateBookingRequest, UpdateBookingStatusRequest};
pub use payment::{CreateOrderRequest, VerifyPaymentRequest};
pub use review::CreateReviewRequest;
