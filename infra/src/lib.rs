//! # Infrastructure Layer
//!
//! Concrete implementations of the ports declared by `tm_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Email**: OTP delivery through a mock or HTTP provider
//! - **Payment**: Razorpay order creation, with an offline mock
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// Email delivery providers
pub mod email;

/// Payment gateway clients
pub mod payment;

mod error;

pub use error::InfrastructureError;
