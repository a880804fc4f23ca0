//! Type definitions shared by the API layer and its clients

pub mod response;

pub use response::{ApiResponse, FieldError};
