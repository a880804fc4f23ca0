//! Booking service module

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::{BookingServiceConfig, TransitionPolicy};
pub use service::{BookingRequest, BookingService};
