//! Account service module
//!
//! Registration, password login, OTP completion and session lookup for both
//! travelers and guiders, plus the administrative toggles.

mod config;
mod service;
mod types;


pub use config::AccountServiceConfig;
pub use service::AccountService;
pub use types::{GuiderRegistration, Registration, TravelerRegistration, MIN_PASSWORD_LENGTH};
