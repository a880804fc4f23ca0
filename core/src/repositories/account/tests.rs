use crate::domain::entities::account::{
    Account, AccountKind, ApprovalStatus, Credentialed, Guider, GuiderType, RateSchedule,
    Traveler,
};
use crate::errors::ErrorKind;

use super::{AccountRepository, GuiderSearch, MockAccountRepository};

fn traveler(email: &str) -> Account {
    Traveler::new(email.into(), None, "hash".into(), "Asha".into(), "Rao".into()).into()
}

fn approved_guider(email: &str, city: &str, per_hour: Option<f64>) -> Guider {
    let mut guider = Guider::new(
        email.into(),
        None,
        "hash".into(),
        "Showcase".into(),
        GuiderType::Professional,
    );
    guider.approval_status = ApprovalStatus::Approved;
    guider.city = Some(city.into());
    guider.rates = RateSchedule {
        price_per_hour: per_hour,
        ..Default::default()
    };
    guider
}

#[tokio::test]
async fn test_email_uniqueness_is_per_kind() {
    let repo = MockAccountRepository::new();
    repo.create(traveler("a@x.com")).await.unwrap();

    let err = repo.create(traveler("a@x.com")).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);

    let guider = approved_guider("a@x.com", "Jaipur", None);
    assert!(repo.create(guider.into()).await.is_ok());
    assert_eq!(repo.count().await, 2);
}

#[tokio::test]
async fn test_find_by_email_respects_kind() {
    let repo = MockAccountRepository::new();
    let created = repo.create(traveler("a@x.com")).await.unwrap();

    let found = repo
        .find_by_email(AccountKind::Traveler, "a@x.com")
        .await
        .unwrap();
    assert_eq!(found.map(|a| a.id()), Some(created.id()));
    assert!(repo
        .find_by_email(AccountKind::Guider, "a@x.com")
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_stale_deactivation_keeps_verification() {
    let repo = MockAccountRepository::new();
    let created = repo.create(traveler("a@x.com")).await.unwrap();
    let id = created.id();

    // An admin read the row before verification landed
    let stale = repo
        .find_by_id(AccountKind::Traveler, id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stale.is_verified());

    repo.mark_verified(AccountKind::Traveler, id).await.unwrap();
    let deactivated = repo
        .set_active(AccountKind::Traveler, stale.id(), false)
        .await
        .unwrap();

    assert!(deactivated.is_verified());
    assert!(!deactivated.is_active());
}

#[tokio::test]
async fn test_password_change_does_not_reactivate() {
    let repo = MockAccountRepository::new();
    let id = repo.create(traveler("a@x.com")).await.unwrap().id();

    repo.set_active(AccountKind::Traveler, id, false).await.unwrap();
    repo.set_password_hash(AccountKind::Traveler, id, "new-hash")
        .await
        .unwrap();

    let stored = repo
        .find_by_id(AccountKind::Traveler, id)
        .await
        .unwrap()
        .unwrap();
    assert!(!stored.is_active());
    assert_eq!(stored.password_hash(), "new-hash");
}

#[tokio::test]
async fn test_approval_preserves_rating_columns() {
    let repo = MockAccountRepository::new();
    let mut guider = approved_guider("g@x.com", "Goa", Some(300.0));
    guider.approval_status = ApprovalStatus::Pending;
    let id = guider.base.id;
    repo.create(guider.into()).await.unwrap();
    repo.update_guider_rating(id, 4.5, 2).await.unwrap();

    let approved = repo
        .set_approval_status(id, ApprovalStatus::Approved)
        .await
        .unwrap();

    assert_eq!(approved.rating, 4.5);
    assert_eq!(approved.total_reviews, 2);
    assert_eq!(approved.approval_status, ApprovalStatus::Approved);
}

#[tokio::test]
async fn test_column_updates_on_missing_accounts() {
    let repo = MockAccountRepository::new();
    let id = uuid::Uuid::new_v4();

    let err = repo.mark_verified(AccountKind::Traveler, id).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // A traveler id is not a guider
    let traveler_id = repo.create(traveler("t@x.com")).await.unwrap().id();
    let err = repo
        .set_approval_status(traveler_id, ApprovalStatus::Approved)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_search_guiders_filters_and_orders() {
    let repo = MockAccountRepository::new();

    let low = approved_guider("low@x.com", "Jaipur", Some(200.0));
    let high = approved_guider("high@x.com", "jaipur city", Some(900.0));
    let elsewhere = approved_guider("goa@x.com", "Goa", Some(300.0));
    let mut pending = approved_guider("pending@x.com", "Jaipur", Some(250.0));
    pending.approval_status = ApprovalStatus::Pending;

    let (low_id, high_id) = (low.base.id, high.base.id);
    for g in [low, high, elsewhere, pending] {
        repo.create(g.into()).await.unwrap();
    }
    repo.update_guider_rating(high_id, 4.8, 5).await.unwrap();
    repo.update_guider_rating(low_id, 3.9, 2).await.unwrap();

    let search = GuiderSearch {
        city: Some("JAIPUR".into()),
        ..Default::default()
    }
    .normalized();
    let page = repo.search_guiders(&search).await.unwrap();
    assert_eq!(page.total, 2);
    assert_eq!(page.guiders[0].base.id, high_id);
    assert_eq!(page.guiders[1].base.id, low_id);

    let cheap = GuiderSearch {
        max_price: Some(250.0),
        ..Default::default()
    }
    .normalized();
    let page = repo.search_guiders(&cheap).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.guiders[0].base.id, low_id);
}

#[test]
fn test_search_normalization() {
    let search = GuiderSearch {
        page: 0,
        limit: 1000,
        ..Default::default()
    }
    .normalized();
    assert_eq!(search.page, 1);
    assert_eq!(search.limit, GuiderSearch::MAX_LIMIT);
    assert_eq!(search.offset(), 0);

    let defaulted = GuiderSearch::default().normalized();
    assert_eq!(defaulted.limit, GuiderSearch::DEFAULT_LIMIT);
}
