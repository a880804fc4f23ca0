//! Review service module
//!
//! Stores one review per booking and keeps each guider's rating aggregate in
//! step with the reviews it is derived from.

mod service;


pub use service::{ReviewRequest, ReviewService};
