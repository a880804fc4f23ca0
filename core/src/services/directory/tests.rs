use uuid::Uuid;

use crate::domain::entities::account::{AccountKind, RateSchedule};
use crate::errors::ErrorKind;
use crate::repositories::{AccountRepository, GuiderSearch};
use crate::services::test_support::Harness;

use super::DirectoryService;

fn hourly(rate: f64) -> RateSchedule {
    RateSchedule {
        price_per_hour: Some(rate),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_search_orders_by_rating_and_pages() {
    let harness = Harness::new();
    let service = DirectoryService::new(harness.accounts.clone());

    let mut ids = Vec::new();
    for (i, rating) in [3.0, 5.0, 4.0].into_iter().enumerate() {
        let id = harness
            .seed_guider(&format!("g{}@x.com", i), hourly(300.0))
            .await;
        harness
            .accounts
            .update_guider_rating(id, rating, 1)
            .await
            .unwrap();
        ids.push(id);
    }

    let page = service
        .search(GuiderSearch {
            limit: 2,
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.total_pages, 2);
    let order: Vec<Uuid> = page.guides.iter().map(|g| g.id).collect();
    assert_eq!(order, vec![ids[1], ids[2]]);

    let second = service
        .search(GuiderSearch {
            page: 2,
            limit: 2,
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(second.guides.len(), 1);
    assert_eq!(second.guides[0].id, ids[0]);
}

#[tokio::test]
async fn test_search_filters() {
    let harness = Harness::new();
    let service = DirectoryService::new(harness.accounts.clone());
    let cheap = harness.seed_guider("cheap@x.com", hourly(150.0)).await;
    harness.seed_guider("pricey@x.com", hourly(900.0)).await;

    let page = service
        .search(GuiderSearch {
            max_price: Some(500.0),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(page.limit, GuiderSearch::DEFAULT_LIMIT);
    assert_eq!(page.guides.len(), 1);
    assert_eq!(page.guides[0].id, cheap);

    let none = service
        .search(GuiderSearch {
            city: Some("goa".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(none.total, 0);
    assert_eq!(none.total_pages, 0);
}

#[tokio::test]
async fn test_hidden_guiders_are_not_found() {
    let harness = Harness::new();
    let service = DirectoryService::new(harness.accounts.clone());
    let visible = harness.seed_guider("v@x.com", hourly(200.0)).await;
    let hidden = harness.seed_guider("h@x.com", hourly(200.0)).await;
    harness
        .account_service
        .set_active(AccountKind::Guider, hidden, false)
        .await
        .unwrap();

    assert_eq!(service.get_guider(visible).await.unwrap().id, visible);
    let err = service.get_guider(hidden).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(service.search(GuiderSearch::default()).await.unwrap().total, 1);
}
