//! OTP ledger interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::account::AccountKind;
use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

/// Persistence for one-time passcodes keyed by `(identifier, account_kind)`
#[async_trait]
pub trait OtpRepository: Send + Sync {
    /// Insert the record, atomically replacing any record for the same pair
    ///
    /// Two concurrent calls for one pair must leave exactly one record.
    async fn upsert(&self, record: OtpRecord) -> Result<(), DomainError>;

    /// The record for the pair if it is still live at `now`
    async fn find_live(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Delete the pair's record only if it still holds `code`
    ///
    /// Returns `true` when a record was removed. A concurrent consumer or a
    /// replacing issuance makes this return `false`.
    async fn consume(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        code: &str,
    ) -> Result<bool, DomainError>;

    /// Delete every record with `expires_at < now`, returning the count
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError>;
}
