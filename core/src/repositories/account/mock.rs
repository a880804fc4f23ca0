//! In-memory implementation of AccountRepository for tests and local runs

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountKind, ApprovalStatus, Credentialed, Guider};
use crate::errors::DomainError;

use super::trait_::{AccountRepository, GuiderPage, GuiderSearch};

/// In-memory account store keyed by `(kind, id)`
pub struct MockAccountRepository {
    accounts: Arc<RwLock<HashMap<(AccountKind, Uuid), Account>>>,
}

impl MockAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored accounts (test helper)
    pub async fn count(&self) -> usize {
        self.accounts.read().await.len()
    }

    /// Overwrite a stored account wholesale (test helper for seeding edits)
    pub async fn replace(&self, account: Account) {
        self.accounts
            .write()
            .await
            .insert((account.kind(), account.id()), account);
    }

    async fn modify<F>(&self, kind: AccountKind, id: Uuid, change: F) -> Result<Account, DomainError>
    where
        F: FnOnce(&mut Account),
    {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(&(kind, id))
            .ok_or_else(|| DomainError::not_found("User"))?;
        change(account);
        Ok(account.clone())
    }
}

impl Default for MockAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn matches_search(guider: &Guider, search: &GuiderSearch) -> bool {
    if !guider.is_bookable() {
        return false;
    }
    if let Some(city) = &search.city {
        let wanted = city.to_lowercase();
        let found = guider
            .city
            .as_ref()
            .map(|c| c.to_lowercase().contains(&wanted))
            .unwrap_or(false);
        if !found {
            return false;
        }
    }
    if search.min_price.is_some() || search.max_price.is_some() {
        let Some(price) = guider.rates.price_per_hour else {
            return false;
        };
        if search.min_price.is_some_and(|min| price < min) {
            return false;
        }
        if search.max_price.is_some_and(|max| price > max) {
            return false;
        }
    }
    if let Some(language) = &search.language {
        if !guider
            .languages
            .iter()
            .any(|l| l.eq_ignore_ascii_case(language))
        {
            return false;
        }
    }
    true
}

#[async_trait]
impl AccountRepository for MockAccountRepository {
    async fn find_by_email(
        &self,
        kind: AccountKind,
        email: &str,
    ) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|((k, _), a)| *k == kind && a.email() == email)
            .map(|(_, a)| a.clone()))
    }

    async fn find_by_id(&self, kind: AccountKind, id: Uuid) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(&(kind, id)).cloned())
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;
        let kind = account.kind();

        if accounts
            .iter()
            .any(|((k, _), a)| *k == kind && a.email() == account.email())
        {
            return Err(DomainError::conflict("User already exists"));
        }

        accounts.insert((kind, account.id()), account.clone());
        Ok(account)
    }

    async fn mark_verified(&self, kind: AccountKind, id: Uuid) -> Result<Account, DomainError> {
        self.modify(kind, id, |account| {
            account.mark_verified();
        })
        .await
    }

    async fn set_active(
        &self,
        kind: AccountKind,
        id: Uuid,
        active: bool,
    ) -> Result<Account, DomainError> {
        self.modify(kind, id, |account| account.set_active(active))
            .await
    }

    async fn set_password_hash(
        &self,
        kind: AccountKind,
        id: Uuid,
        password_hash: &str,
    ) -> Result<(), DomainError> {
        self.modify(kind, id, |account| {
            account.set_password_hash(password_hash.to_string())
        })
        .await
        .map(|_| ())
    }

    async fn set_approval_status(
        &self,
        guider_id: Uuid,
        status: ApprovalStatus,
    ) -> Result<Guider, DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&(AccountKind::Guider, guider_id)) {
            Some(Account::Guider(guider)) => {
                guider.approval_status = status;
                guider.base.touch();
                Ok(guider.clone())
            }
            _ => Err(DomainError::not_found("Guide")),
        }
    }

    async fn update_guider_rating(
        &self,
        guider_id: Uuid,
        rating: f64,
        total_reviews: u32,
    ) -> Result<(), DomainError> {
        let mut accounts = self.accounts.write().await;
        match accounts.get_mut(&(AccountKind::Guider, guider_id)) {
            Some(Account::Guider(guider)) => {
                guider.rating = rating;
                guider.total_reviews = total_reviews;
                Ok(())
            }
            _ => Err(DomainError::not_found("Guide")),
        }
    }

    async fn search_guiders(&self, search: &GuiderSearch) -> Result<GuiderPage, DomainError> {
        let accounts = self.accounts.read().await;
        let mut matched: Vec<Guider> = accounts
            .values()
            .filter_map(|a| match a {
                Account::Guider(g) if matches_search(g, search) => Some(g.clone()),
                _ => None,
            })
            .collect();

        matched.sort_by(|a, b| {
            b.rating
                .total_cmp(&a.rating)
                .then_with(|| b.base.created_at.cmp(&a.base.created_at))
        });

        let total = matched.len() as u64;
        let guiders = matched
            .into_iter()
            .skip(search.offset() as usize)
            .take(search.limit as usize)
            .collect();

        Ok(GuiderPage { guiders, total })
    }
}
