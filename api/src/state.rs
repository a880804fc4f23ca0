//! Application state shared by every worker
//!
//! Services are built once and handed to actix as `web::Data<AppState>`.
//! Storage is MySQL when `DATABASE_URL` is configured and the in-memory
//! repositories otherwise.

use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use tm_core::repositories::{
    AccountRepository, BookingRepository, MockAccountRepository, MockBookingRepository,
    MockOtpRepository, MockReviewRepository, OtpRepository, ReviewRepository,
};
use tm_core::services::account::{AccountService, AccountServiceConfig};
use tm_core::services::booking::{BookingService, BookingServiceConfig};
use tm_core::services::directory::DirectoryService;
use tm_core::services::payment::{PaymentGateway, PaymentService, PaymentServiceConfig};
use tm_core::services::review::ReviewService;
use tm_core::services::token::{TokenService, TokenServiceConfig};
use tm_core::services::verification::{
    DeliveryMode, NotificationServiceTrait, OtpSweeper, OtpSweeperConfig, VerificationService,
    VerificationServiceConfig,
};
use tm_infra::database::{
    DatabasePool, MySqlAccountRepository, MySqlBookingRepository, MySqlOtpRepository,
    MySqlReviewRepository,
};
use tm_infra::email::{create_email_service, MockEmailService};
use tm_infra::payment::{create_payment_gateway, MockPaymentGateway};
use tm_shared::AppConfig;

/// The four stores behind the services
struct Stores {
    accounts: Arc<dyn AccountRepository>,
    otps: Arc<dyn OtpRepository>,
    bookings: Arc<dyn BookingRepository>,
    reviews: Arc<dyn ReviewRepository>,
}

impl Stores {
    fn in_memory() -> Self {
        Self {
            accounts: Arc::new(MockAccountRepository::new()),
            otps: Arc::new(MockOtpRepository::new()),
            bookings: Arc::new(MockBookingRepository::new()),
            reviews: Arc::new(MockReviewRepository::new()),
        }
    }

    fn mysql(pool: &DatabasePool) -> Self {
        let pool = pool.get_pool().clone();
        Self {
            accounts: Arc::new(MySqlAccountRepository::new(pool.clone())),
            otps: Arc::new(MySqlOtpRepository::new(pool.clone())),
            bookings: Arc::new(MySqlBookingRepository::new(pool.clone())),
            reviews: Arc::new(MySqlReviewRepository::new(pool)),
        }
    }
}

/// Shared application services
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub verification_service: Arc<VerificationService>,
    pub booking_service: Arc<BookingService>,
    pub review_service: Arc<ReviewService>,
    pub payment_service: Arc<PaymentService>,
    pub directory_service: Arc<DirectoryService>,
    pub config: AppConfig,
    /// Present when storage is MySQL
    pub database: Option<DatabasePool>,
    pub started_at: Instant,
}

impl AppState {
    /// Wire the production stack described by `config`
    ///
    /// # Errors
    /// Fails when the database is unreachable, the schema cannot be applied,
    /// or a configured provider is missing its settings.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let (stores, database) = if config.database.url.is_some() {
            let pool = DatabasePool::new(&config.database)
                .await
                .context("connecting to MySQL")?;
            if config.database.run_migrations {
                pool.run_migrations()
                    .await
                    .context("applying database schema")?;
            }
            (Stores::mysql(&pool), Some(pool))
        } else {
            tracing::warn!("DATABASE_URL is not set, using in-memory storage");
            (Stores::in_memory(), None)
        };

        let notifier = create_email_service(&config.notification)
            .context("configuring email delivery")?;
        let gateway =
            create_payment_gateway(&config.payment).context("configuring payment gateway")?;

        let verification_config = VerificationServiceConfig::from(&config.otp);
        Ok(Self::assemble(
            config,
            stores,
            notifier,
            gateway,
            verification_config,
            database,
        ))
    }

    /// Fully in-memory wiring with the mock email and payment providers
    ///
    /// Passcode emails are delivered inline so the returned outbox is
    /// populated as soon as a request completes.
    pub fn in_memory(config: &AppConfig) -> (Self, Arc<MockEmailService>) {
        let mailer = Arc::new(MockEmailService::new());
        let verification_config = VerificationServiceConfig {
            delivery: DeliveryMode::Inline,
            ..VerificationServiceConfig::from(&config.otp)
        };
        let state = Self::assemble(
            config,
            Stores::in_memory(),
            mailer.clone(),
            Arc::new(MockPaymentGateway::new()),
            verification_config,
            None,
        );
        (state, mailer)
    }

    fn assemble(
        config: &AppConfig,
        stores: Stores,
        notifier: Arc<dyn NotificationServiceTrait>,
        gateway: Arc<dyn PaymentGateway>,
        verification_config: VerificationServiceConfig,
        database: Option<DatabasePool>,
    ) -> Self {
        let verification_service = Arc::new(VerificationService::new(
            stores.otps,
            notifier,
            verification_config,
        ));
        let token_service = Arc::new(TokenService::new(TokenServiceConfig::from(
            config.auth.jwt.clone(),
        )));
        let account_service = Arc::new(AccountService::new(
            stores.accounts.clone(),
            verification_service.clone(),
            token_service,
            AccountServiceConfig::from(&config.auth),
        ));
        let booking_service = Arc::new(BookingService::new(
            stores.bookings.clone(),
            stores.accounts.clone(),
            BookingServiceConfig::from(&config.booking),
        ));
        let review_service = Arc::new(ReviewService::new(
            stores.reviews,
            stores.bookings,
            stores.accounts.clone(),
        ));
        let payment_service = Arc::new(PaymentService::new(
            booking_service.clone(),
            gateway,
            PaymentServiceConfig::from(&config.payment),
        ));
        let directory_service = Arc::new(DirectoryService::new(stores.accounts));

        Self {
            account_service,
            verification_service,
            booking_service,
            review_service,
            payment_service,
            directory_service,
            config: config.clone(),
            database,
            started_at: Instant::now(),
        }
    }

    /// Background cleaner for expired passcodes
    pub fn otp_sweeper(&self) -> Arc<OtpSweeper> {
        Arc::new(OtpSweeper::new(
            self.verification_service.clone(),
            OtpSweeperConfig::from(&self.config.otp),
        ))
    }
}
