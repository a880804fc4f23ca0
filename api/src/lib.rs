//! # TourMate API
//!
//! actix-web front end for the marketplace: authentication, bookings,
//! reviews, payments, the guide directory and account moderation. All
//! responses use the `tm_shared::ApiResponse` envelope.

pub mod app;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod telemetry;

pub use app::create_app;
pub use state::AppState;
