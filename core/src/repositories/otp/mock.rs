//! In-memory OTP ledger

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::account::AccountKind;
use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

use super::trait_::OtpRepository;

/// Map keyed by the `(identifier, kind)` pair, so an insert is an upsert
pub struct MockOtpRepository {
    records: Arc<RwLock<HashMap<(String, AccountKind), OtpRecord>>>,
}

impl MockOtpRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Stored record for a pair regardless of expiry (test helper)
    pub async fn get(&self, identifier: &str, account_kind: AccountKind) -> Option<OtpRecord> {
        self.records
            .read()
            .await
            .get(&(identifier.to_string(), account_kind))
            .cloned()
    }

    /// Number of stored records (test helper)
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Overwrite a stored record's expiry (test helper)
    pub async fn set_expiry(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        expires_at: DateTime<Utc>,
    ) {
        if let Some(record) = self
            .records
            .write()
            .await
            .get_mut(&(identifier.to_string(), account_kind))
        {
            record.expires_at = expires_at;
        }
    }
}

impl Default for MockOtpRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpRepository for MockOtpRepository {
    async fn upsert(&self, record: OtpRecord) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        records.insert((record.identifier.clone(), record.account_kind), record);
        Ok(())
    }

    async fn find_live(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        now: DateTime<Utc>,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .get(&(identifier.to_string(), account_kind))
            .filter(|r| r.is_live(now))
            .cloned())
    }

    async fn consume(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        code: &str,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        let key = (identifier.to_string(), account_kind);
        if records.get(&key).is_some_and(|r| r.code == code) {
            records.remove(&key);
            return Ok(true);
        }
        Ok(false)
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, r| !r.is_expired(now));
        Ok((before - records.len()) as u64)
    }
}
