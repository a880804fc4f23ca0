//! HTTP routes under `/api/v1`

pub mod admin;
pub mod auth;
pub mod bookings;
pub mod guides;
pub mod health;
pub mod payments;
pub mod reviews;

use actix_web::web;

/// Register every versioned route
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(auth::configure)
        .configure(bookings::configure)
        .configure(reviews::configure)
        .configure(payments::configure)
        .configure(guides::configure)
        .configure(admin::configure);
}
