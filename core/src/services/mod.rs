//! Business services containing domain logic and use cases.

pub mod account;
pub mod booking;
pub mod directory;
pub mod payment;
pub mod review;
pub mod token;
pub mod verification;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use account::{
    AccountService, AccountServiceConfig, GuiderRegistration, Registration, TravelerRegistration,
};
pub use booking::{BookingRequest, BookingService, BookingServiceConfig, TransitionPolicy};
pub use directory::{DirectoryService, GuideDirectoryPage};
pub use payment::{
    GatewayOrder, PaymentGateway, PaymentOrder, PaymentService, PaymentServiceConfig,
    PaymentVerification,
};
pub use review::{ReviewRequest, ReviewService};
pub use token::{TokenService, TokenServiceConfig};
pub use verification::{
    DeliveryMode, NotificationServiceTrait, OtpSweeper, OtpSweeperConfig, VerificationService,
    VerificationServiceConfig,
};
