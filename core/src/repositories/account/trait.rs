//! Account repository trait defining the credential store interface.
//!
//! Travelers and guiders live in separate stores; email uniqueness is scoped
//! per [`AccountKind`], so the same address may hold one account of each kind.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountKind, ApprovalStatus, Guider};
use crate::errors::DomainError;

/// Filters for the guide directory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GuiderSearch {
    /// Case-insensitive substring of the guider's city
    pub city: Option<String>,
    /// Lower bound on `price_per_hour`
    pub min_price: Option<f64>,
    /// Upper bound on `price_per_hour`
    pub max_price: Option<f64>,
    /// Guider must list this language
    pub language: Option<String>,
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
}

impl GuiderSearch {
    pub const DEFAULT_LIMIT: u32 = 12;
    pub const MAX_LIMIT: u32 = 100;

    /// Clamp paging to sane values
    pub fn normalized(mut self) -> Self {
        self.page = self.page.max(1);
        self.limit = match self.limit {
            0 => Self::DEFAULT_LIMIT,
            l => l.min(Self::MAX_LIMIT),
        };
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

/// One page of directory results plus the total match count
#[derive(Debug, Clone, PartialEq)]
pub struct GuiderPage {
    pub guiders: Vec<Guider>,
    pub total: u64,
}

/// Repository trait for account persistence operations
///
/// Every mutation after `create` writes only its own columns, so concurrent
/// changes to different fields of one account never overwrite each other.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Find an account of the given kind by normalized email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account of that kind uses the email
    /// * `Err(DomainError)` - Storage failure
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError>;

    /// Find an account of the given kind by id
    async fn find_by_id(&self, kind: AccountKind, id: Uuid) -> Result<Option<Account>, DomainError>;

    /// Persist a new account
    ///
    /// # Errors
    /// * `DomainError::Conflict` - An account of the same kind already uses the email
    async fn create(&self, account: Account) -> Result<Account, DomainError>;

    /// Set `is_verified`, returning the stored account
    ///
    /// Verification is one-way; there is no operation that clears the flag.
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such account
    async fn mark_verified(&self, kind: AccountKind, id: Uuid) -> Result<Account, DomainError>;

    /// Set `is_active`, returning the stored account
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such account
    async fn set_active(
        &self,
        kind: AccountKind,
        id: Uuid,
        active: bool,
    ) -> Result<Account, DomainError>;

    /// Replace the stored password hash
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such account
    async fn set_password_hash(
        &self,
        kind: AccountKind,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), DomainError>;

    /// Move a guider to `status`, returning the stored guider
    ///
    /// # Errors
    /// * `DomainError::NotFound` - No such guider
    async fn set_approval_status(
        &self,
        guider_id: Uuid,
        status: ApprovalStatus,
    ) -> Result<Guider, DomainError>;

    /// Store a recomputed rating aggregate on a guider
    async fn update_guider_rating(
        &self,
        guider_id: Uuid,
        rating: f64,
        total_reviews: u32,
    ) -> Result<(), DomainError>;

    /// Active, approved guiders matching the filter, best rated first then newest
    async fn search_guiders(&self, search: &GuiderSearch) -> Result<GuiderPage, DomainError>;
}
