//! End-to-end marketplace flow over the in-memory repositories

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use std::sync::{Arc, Mutex};

    use tm_core::domain::entities::account::{AccountKind, ApprovalStatus, GuiderType, RateSchedule};
    use tm_core::domain::entities::booking::BookingStatus;
    use tm_core::repositories::{
        GuiderSearch, MockAccountRepository, MockBookingRepository, MockOtpRepository,
        MockReviewRepository,
    };
    use tm_core::services::account::{
        AccountService, AccountServiceConfig, GuiderRegistration, Registration,
        TravelerRegistration,
    };
    use tm_core::services::booking::{BookingRequest, BookingService, BookingServiceConfig};
    use tm_core::services::directory::DirectoryService;
    use tm_core::services::review::{ReviewRequest, ReviewService};
    use tm_core::services::token::{TokenService, TokenServiceConfig};
    use tm_core::services::verification::{
        DeliveryMode, NotificationServiceTrait, VerificationService, VerificationServiceConfig,
    };

    // Records recipients only
    #[derive(Default)]
    struct Inbox {
        recipients: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl NotificationServiceTrait for Inbox {
        async fn send_template(
            &self,
            recipient: &str,
            _template: &str,
            _data: serde_json::Value,
        ) -> Result<String, String> {
            self.recipients.lock().unwrap().push(recipient.to_string());
            Ok("msg".to_string())
        }
    }

    struct App {
        inbox: Arc<Inbox>,
        accounts: AccountService,
        bookings: BookingService,
        reviews: ReviewService,
        directory: DirectoryService,
    }

    fn app() -> App {
        let account_repo = Arc::new(MockAccountRepository::new());
        let booking_repo = Arc::new(MockBookingRepository::new());
        let review_repo = Arc::new(MockReviewRepository::new());
        let inbox = Arc::new(Inbox::default());

        let verification = Arc::new(VerificationService::new(
            Arc::new(MockOtpRepository::new()),
            inbox.clone(),
            VerificationServiceConfig {
                deterministic: true,
                delivery: DeliveryMode::Inline,
                ..Default::default()
            },
        ));
        let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()));

        App {
            inbox,
            accounts: AccountService::new(
                account_repo.clone(),
                verification,
                tokens,
                AccountServiceConfig {
                    bcrypt_cost: 4, // bcrypt::MIN_COST (private in bcrypt 0.15)
                },
            ),
            bookings: BookingService::new(
                booking_repo.clone(),
                account_repo.clone(),
                BookingServiceConfig::default(),
            ),
            reviews: ReviewService::new(review_repo, booking_repo, account_repo.clone()),
            directory: DirectoryService::new(account_repo),
        }
    }

    #[tokio::test]
    async fn test_register_verify_book_review() {
        let app = app();

        // Traveler signs up and verifies with the development code
        let registered = app
            .accounts
            .register(Registration::Traveler(TravelerRegistration {
                email: "asha@example.com".into(),
                mobile: None,
                password: "secret1".into(),
                first_name: "Asha".into(),
                last_name: "Rao".into(),
                city: None,
                travel_styles: Vec::new(),
            }))
            .await
            .unwrap();
        assert!(registered.requires_verification);
        assert!(registered.token.is_none());

        let traveler = app
            .accounts
            .complete_verification(AccountKind::Traveler, "asha@example.com", "123456")
            .await
            .unwrap();
        assert!(traveler.token.is_some());
        assert!(traveler.profile.is_verified());
        let traveler_id = traveler.profile.id();

        // Guider signs up, verifies and is approved
        let guider = app
            .accounts
            .register(Registration::Guider(GuiderRegistration {
                email: "rahul@example.com".into(),
                mobile: None,
                password: "secret1".into(),
                showcase_name: "Rahul Sharma".into(),
                guider_type: GuiderType::Professional,
                city: Some("Jaipur".into()),
                overview: None,
                languages: vec!["English".into()],
                rates: RateSchedule {
                    price_per_hour: Some(200.0),
                    ..Default::default()
                },
                currency: None,
            }))
            .await
            .unwrap();
        let guider_id = guider.profile.id();
        app.accounts
            .complete_verification(AccountKind::Guider, "rahul@example.com", "123456")
            .await
            .unwrap();

        let booking_request = BookingRequest {
            guider_id,
            place: "Amber Fort".into(),
            start_date: Utc::now() + Duration::days(2),
            duration_hours: 3,
            num_people: 2,
            special_requests: Some("Wheelchair access".into()),
        };

        // Pending guiders are not bookable
        assert!(app
            .bookings
            .create(traveler_id, booking_request.clone())
            .await
            .is_err());
        app.accounts
            .set_guider_approval(guider_id, ApprovalStatus::Approved)
            .await
            .unwrap();

        let listed = app
            .directory
            .search(GuiderSearch {
                city: Some("jaipur".into()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(listed.total, 1);

        let booking = app
            .bookings
            .create(traveler_id, booking_request)
            .await
            .unwrap();
        assert_eq!(booking.price, 600.0);
        assert_eq!(booking.status, BookingStatus::Pending);

        app.bookings
            .set_status(booking.id, BookingStatus::Accepted, guider_id)
            .await
            .unwrap();
        app.bookings
            .set_status(booking.id, BookingStatus::Completed, guider_id)
            .await
            .unwrap();

        app.reviews
            .create_review(
                traveler_id,
                ReviewRequest {
                    booking_id: booking.id,
                    guider_id,
                    rating: 5,
                    comment: Some("Knew every corner of the fort".into()),
                },
            )
            .await
            .unwrap();

        let profile = app.directory.get_guider(guider_id).await.unwrap();
        assert_eq!(profile.rating, 5.0);
        assert_eq!(profile.total_reviews, 1);

        let recipients = app.inbox.recipients.lock().unwrap().clone();
        assert_eq!(recipients, vec!["asha@example.com", "rahul@example.com"]);
    }
}
