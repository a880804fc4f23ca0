//! Unit tests for booking service

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::account::{Account, AccountKind, RateSchedule};
use crate::domain::entities::booking::{BookingRole, BookingStatus};
use crate::errors::ErrorKind;
use crate::repositories::AccountRepository;
use crate::services::booking::{BookingRequest, TransitionPolicy};
use crate::services::test_support::Harness;

fn request(guider_id: Uuid, duration_hours: u32) -> BookingRequest {
    BookingRequest {
        guider_id,
        place: "Amber Fort".to_string(),
        start_date: Utc::now() + Duration::days(3),
        duration_hours,
        num_people: 2,
        special_requests: None,
    }
}

fn rates(hour: Option<f64>, day: Option<f64>, tour: Option<f64>) -> RateSchedule {
    RateSchedule {
        price_per_hour: hour,
        price_per_day: day,
        price_per_tour: tour,
    }
}

#[tokio::test]
async fn test_price_follows_rate_precedence() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;

    let hourly = harness
        .seed_guider("h@x.com", rates(Some(200.0), Some(1000.0), None))
        .await;
    let daily = harness
        .seed_guider("d@x.com", rates(None, Some(1000.0), Some(1500.0)))
        .await;
    let flat = harness
        .seed_guider("f@x.com", rates(None, None, Some(1500.0)))
        .await;
    let none = harness.seed_guider("n@x.com", RateSchedule::default()).await;

    let cases = [(hourly, 3, 600.0), (daily, 10, 2000.0), (flat, 4, 1500.0), (none, 2, 1000.0)];
    for (guider, hours, expected) in cases {
        let booking = service.create(traveler, request(guider, hours)).await.unwrap();
        assert_eq!(booking.price, expected);
        assert_eq!(booking.status, BookingStatus::Pending);
        assert!(!booking.is_paid);
        assert_eq!(booking.currency, "INR");
    }
}

#[tokio::test]
async fn test_price_is_fixed_at_creation() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness
        .seed_guider("g@x.com", rates(Some(200.0), None, None))
        .await;

    let booking = service.create(traveler, request(guider, 3)).await.unwrap();

    let Some(Account::Guider(mut stored)) = harness
        .accounts
        .find_by_id(AccountKind::Guider, guider)
        .await
        .unwrap()
    else {
        panic!("guider missing");
    };
    stored.rates.price_per_hour = Some(900.0);
    harness.accounts.replace(stored.into()).await;

    let fetched = service.get_by_id(booking.id, traveler).await.unwrap();
    assert_eq!(fetched.price, 600.0);
}

#[tokio::test]
async fn test_unbookable_guiders_are_not_found() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;

    let missing = service
        .create(traveler, request(Uuid::new_v4(), 2))
        .await
        .unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::NotFound);
    assert_eq!(missing.to_string(), "Guide not found");

    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    harness
        .account_service
        .set_active(AccountKind::Guider, guider, false)
        .await
        .unwrap();
    let inactive = service.create(traveler, request(guider, 2)).await.unwrap_err();
    assert_eq!(inactive.kind(), ErrorKind::NotFound);

    // A traveler id is never a guider
    let wrong_kind = service.create(traveler, request(traveler, 2)).await.unwrap_err();
    assert_eq!(wrong_kind.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_request_validation() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;

    let mut bad = request(guider, 0);
    bad.num_people = 0;
    bad.place = "  ".to_string();

    let err = service.create(traveler, bad).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    let fields: Vec<&str> = err
        .field_violations()
        .iter()
        .map(|v| v.field.as_str())
        .collect();
    assert_eq!(fields, vec!["place", "durationHours", "numPeople"]);
}

#[tokio::test]
async fn test_only_parties_can_read_booking() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    let booking = service.create(traveler, request(guider, 2)).await.unwrap();

    assert!(service.get_by_id(booking.id, traveler).await.is_ok());
    assert!(service.get_by_id(booking.id, guider).await.is_ok());

    let outsider = service
        .get_by_id(booking.id, Uuid::new_v4())
        .await
        .unwrap_err();
    assert_eq!(outsider.kind(), ErrorKind::Forbidden);
    assert_eq!(outsider.to_string(), "Access denied");

    let missing = service
        .get_by_id(Uuid::new_v4(), traveler)
        .await
        .unwrap_err();
    assert_eq!(missing.to_string(), "Booking not found");
}

#[tokio::test]
async fn test_only_guider_changes_status() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    let booking = service.create(traveler, request(guider, 2)).await.unwrap();

    let err = service
        .set_status(booking.id, BookingStatus::Accepted, traveler)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);

    let accepted = service
        .set_status(booking.id, BookingStatus::Accepted, guider)
        .await
        .unwrap();
    assert_eq!(accepted.status, BookingStatus::Accepted);
}

#[tokio::test]
async fn test_lenient_policy_allows_any_transition() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    let booking = service.create(traveler, request(guider, 2)).await.unwrap();

    service
        .set_status(booking.id, BookingStatus::Completed, guider)
        .await
        .unwrap();
    let reopened = service
        .set_status(booking.id, BookingStatus::Pending, guider)
        .await
        .unwrap();
    assert_eq!(reopened.status, BookingStatus::Pending);
}

#[tokio::test]
async fn test_strict_policy_rejects_illegal_transition() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Strict);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    let booking = service.create(traveler, request(guider, 2)).await.unwrap();

    let err = service
        .set_status(booking.id, BookingStatus::Completed, guider)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(
        err.to_string(),
        "Cannot change booking status from pending to completed"
    );

    service
        .set_status(booking.id, BookingStatus::Accepted, guider)
        .await
        .unwrap();
    service
        .set_status(booking.id, BookingStatus::Completed, guider)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_list_for_account_with_role_filter() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;

    let first = service.create(traveler, request(guider, 1)).await.unwrap();
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = service.create(traveler, request(guider, 2)).await.unwrap();

    let listed = service.list_for_account(traveler, None).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);

    assert_eq!(
        service
            .list_for_account(guider, Some(BookingRole::Guider))
            .await
            .unwrap()
            .len(),
        2
    );
    assert!(service
        .list_for_account(traveler, Some(BookingRole::Guider))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_mark_paid_records_reference() {
    let harness = Harness::new();
    let service = harness.booking_service(TransitionPolicy::Lenient);
    let traveler = harness.seed_traveler("t@x.com").await;
    let guider = harness.seed_guider("g@x.com", RateSchedule::default()).await;
    let booking = service.create(traveler, request(guider, 2)).await.unwrap();

    let paid = service.mark_paid(booking.id, "pay_123").await.unwrap();
    assert!(paid.is_paid);
    assert_eq!(paid.payment_ref.as_deref(), Some("pay_123"));
}
