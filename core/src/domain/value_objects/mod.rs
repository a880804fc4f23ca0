//! Value objects representing immutable domain concepts.

pub mod auth_outcome;

// Re-export commonly used types
pub use auth_outcome::{AuthOutcome, ResendReceipt};
