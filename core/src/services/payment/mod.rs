//! Payment service module
//!
//! Creates gateway orders for bookings and checks the signed payment
//! callback before a booking is marked as paid.

mod config;
mod service;
mod traits;
mod types;


pub use config::PaymentServiceConfig;
pub use service::{sign_payment, PaymentService};
pub use traits::{GatewayOrder, PaymentGateway};
pub use types::{PaymentOrder, PaymentVerification};
