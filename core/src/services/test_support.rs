//! Shared doubles for service unit tests

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::entities::account::{ApprovalStatus, Guider, GuiderType, RateSchedule, Traveler};
use crate::repositories::{
    AccountRepository, MockAccountRepository, MockBookingRepository, MockOtpRepository,
    MockReviewRepository,
};
use crate::services::account::{AccountService, AccountServiceConfig};
use crate::services::booking::{BookingService, BookingServiceConfig, TransitionPolicy};
use crate::services::payment::{GatewayOrder, PaymentGateway};
use crate::services::review::ReviewService;
use crate::services::token::{TokenService, TokenServiceConfig};
use crate::services::verification::{
    DeliveryMode, NotificationServiceTrait, VerificationService, VerificationServiceConfig,
};

/// Captured email: recipient, template, data
pub type SentMessage = (String, String, serde_json::Value);

pub struct MockNotifier {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    pub should_fail: bool,
}

impl MockNotifier {
    pub fn new(should_fail: bool) -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
            should_fail,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_code(&self) -> Option<String> {
        self.sent
            .lock()
            .unwrap()
            .last()
            .and_then(|(_, _, data)| data["code"].as_str().map(str::to_string))
    }
}

#[async_trait]
impl NotificationServiceTrait for MockNotifier {
    async fn send_template(
        &self,
        recipient: &str,
        template: &str,
        data: serde_json::Value,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Email provider unavailable".to_string());
        }
        self.sent
            .lock()
            .unwrap()
            .push((recipient.to_string(), template.to_string(), data));
        Ok(format!("mock-msg-{}", Uuid::new_v4()))
    }
}

/// Gateway double that numbers its orders
pub struct MockGateway {
    pub should_fail: bool,
    pub orders: Arc<Mutex<Vec<GatewayOrder>>>,
}

impl MockGateway {
    pub fn new(should_fail: bool) -> Self {
        Self {
            should_fail,
            orders: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn create_order(
        &self,
        amount_minor: u64,
        currency: &str,
        _receipt: &str,
    ) -> Result<GatewayOrder, String> {
        if self.should_fail {
            return Err("gateway unavailable".to_string());
        }
        let mut orders = self.orders.lock().unwrap();
        let order = GatewayOrder {
            id: format!("order_{}", orders.len() + 1),
            amount_minor,
            currency: currency.to_string(),
        };
        orders.push(order.clone());
        Ok(order)
    }
}

/// Every service wired over the in-memory repositories
pub struct Harness {
    pub accounts: Arc<MockAccountRepository>,
    pub otps: Arc<MockOtpRepository>,
    pub bookings: Arc<MockBookingRepository>,
    pub reviews: Arc<MockReviewRepository>,
    pub notifier: Arc<MockNotifier>,
    pub tokens: Arc<TokenService>,
    pub account_service: AccountService,
}

impl Harness {
    /// Deterministic OTP, inline delivery, cheap bcrypt
    pub fn new() -> Self {
        let accounts = Arc::new(MockAccountRepository::new());
        let otps = Arc::new(MockOtpRepository::new());
        let notifier = Arc::new(MockNotifier::new(false));
        let verification = Arc::new(VerificationService::new(
            otps.clone(),
            notifier.clone(),
            VerificationServiceConfig {
                deterministic: true,
                delivery: DeliveryMode::Inline,
                ..Default::default()
            },
        ));
        let tokens = Arc::new(TokenService::new(TokenServiceConfig {
            jwt_secret: "test-secret".into(),
            session_token_expiry_seconds: 3600,
            issuer: "tourmate".into(),
        }));
        let account_service = AccountService::new(
            accounts.clone(),
            verification,
            tokens.clone(),
            AccountServiceConfig {
                bcrypt_cost: 4, // bcrypt::MIN_COST (private in bcrypt 0.15)
            },
        );

        Self {
            accounts,
            otps,
            bookings: Arc::new(MockBookingRepository::new()),
            reviews: Arc::new(MockReviewRepository::new()),
            notifier,
            tokens,
            account_service,
        }
    }

    pub fn booking_service(&self, transition_policy: TransitionPolicy) -> BookingService {
        BookingService::new(
            self.bookings.clone(),
            self.accounts.clone(),
            BookingServiceConfig {
                transition_policy,
                ..Default::default()
            },
        )
    }

    pub fn review_service(&self) -> ReviewService {
        ReviewService::new(
            self.reviews.clone(),
            self.bookings.clone(),
            self.accounts.clone(),
        )
    }

    /// Store a verified traveler directly
    pub async fn seed_traveler(&self, email: &str) -> Uuid {
        let mut traveler = Traveler::new(
            email.to_string(),
            None,
            "unused".into(),
            "Asha".into(),
            "Rao".into(),
        );
        traveler.base.is_verified = true;
        let id = traveler.base.id;
        self.accounts.create(traveler.into()).await.unwrap();
        id
    }

    /// Store an approved, active guider with the given rates
    pub async fn seed_guider(&self, email: &str, rates: RateSchedule) -> Uuid {
        let mut guider = Guider::new(
            email.to_string(),
            None,
            "unused".into(),
            "Rahul Sharma".into(),
            GuiderType::Professional,
        );
        guider.base.is_verified = true;
        guider.approval_status = ApprovalStatus::Approved;
        guider.rates = rates;
        let id = guider.base.id;
        self.accounts.create(guider.into()).await.unwrap();
        id
    }
}
