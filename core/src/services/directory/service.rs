//! Search and lookup over visible guiders

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountKind, GuiderProfile};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{AccountRepository, GuiderSearch};

/// One page of directory results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideDirectoryPage {
    pub guides: Vec<GuiderProfile>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

/// Read-only view of active, approved guiders
pub struct DirectoryService {
    account_repository: Arc<dyn AccountRepository>,
}

impl DirectoryService {
    pub fn new(account_repository: Arc<dyn AccountRepository>) -> Self {
        Self { account_repository }
    }

    /// Filtered, paged listing, best rated first
    pub async fn search(&self, search: GuiderSearch) -> DomainResult<GuideDirectoryPage> {
        let search = search.normalized();
        let page = self.account_repository.search_guiders(&search).await?;

        Ok(GuideDirectoryPage {
            guides: page.guiders.iter().map(GuiderProfile::from).collect(),
            total: page.total,
            page: search.page,
            limit: search.limit,
            total_pages: page.total.div_ceil(u64::from(search.limit)),
        })
    }

    /// A single visible guider
    pub async fn get_guider(&self, guider_id: Uuid) -> DomainResult<GuiderProfile> {
        match self
            .account_repository
            .find_by_id(AccountKind::Guider, guider_id)
            .await?
        {
            Some(Account::Guider(guider)) if guider.is_bookable() => Ok(GuiderProfile::from(&guider)),
            _ => Err(DomainError::not_found("Guide")),
        }
    }
}
