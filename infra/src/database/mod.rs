//! Database module - MySQL implementations using SQLx
//!
//! This module provides:
//! - Connection pool management and the embedded schema
//! - Repository implementations for the core traits

pub mod connection;
pub mod mysql;

// Re-export commonly used types
pub use connection::DatabasePool;
pub use mysql::{
    MySqlAccountRepository, MySqlBookingRepository, MySqlOtpRepository, MySqlReviewRepository,
};
