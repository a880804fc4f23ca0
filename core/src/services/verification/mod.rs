//! Verification service module for email OTP checks
//!
//! This module provides the passcode workflow shared by both account kinds:
//! - Code generation, upsert into the OTP ledger, and best-effort email
//! - Single-use verification with uniform failure
//! - Re-issuance for unverified logins
//! - Periodic sweeping of expired codes

mod config;
mod service;
mod sweeper;
mod traits;
mod types;


pub use config::{DeliveryMode, VerificationServiceConfig};
pub use service::VerificationService;
pub use sweeper::{OtpSweeper, OtpSweeperConfig};
pub use traits::NotificationServiceTrait;
pub use types::{IssueResult, OtpStatus, OTP_TEMPLATE};
