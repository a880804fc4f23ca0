//! MySQL implementations of the core repository traits

mod account_repository;
mod booking_repository;
mod otp_repository;
mod review_repository;

pub use account_repository::MySqlAccountRepository;
pub use booking_repository::MySqlBookingRepository;
pub use otp_repository::MySqlOtpRepository;
pub use review_repository::MySqlReviewRepository;

use sqlx::mysql::MySqlRow;
use sqlx::{MySql, Row};
use tm_core::errors::DomainError;
use uuid::Uuid;

/// Read a column, mapping decode failures to a database error
pub(crate) fn column<'r, T>(row: &'r MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
{
    row.try_get(name)
        .map_err(|e| DomainError::Database(format!("Failed to read {}: {}", name, e)))
}

/// Read a `CHAR(36)` id column
pub(crate) fn uuid_column(row: &MySqlRow, name: &str) -> Result<Uuid, DomainError> {
    let raw: String = column(row, name)?;
    Uuid::parse_str(&raw).map_err(|e| DomainError::Database(format!("Invalid UUID in {}: {}", name, e)))
}

/// Read a string column and parse it into an enum
pub(crate) fn parsed_column<T>(row: &MySqlRow, name: &str) -> Result<T, DomainError>
where
    T: std::str::FromStr<Err = String>,
{
    let raw: String = column(row, name)?;
    raw.parse().map_err(DomainError::Database)
}

/// Read a JSON-encoded string list stored in a TEXT column
pub(crate) fn list_column(row: &MySqlRow, name: &str) -> Result<Vec<String>, DomainError> {
    let raw: String = column(row, name)?;
    serde_json::from_str(&raw).map_err(|e| DomainError::Database(format!("Invalid list in {}: {}", name, e)))
}

pub(crate) fn encode_list(values: &[String]) -> String {
    serde_json::to_string(values).unwrap_or_else(|_| String::from("[]"))
}

/// Map a query failure, logging it with the operation name
pub(crate) fn query_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DomainError {
    move |e| {
        tracing::error!(operation, error = %e, "Database query failed");
        DomainError::Database(format!("Failed to {}: {}", operation, e))
    }
}

pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .map(|db| db.is_unique_violation())
        .unwrap_or(false)
}
