//! OTP issuance delivered through the mock email provider

use std::sync::Arc;

use tm_core::domain::entities::account::AccountKind;
use tm_core::domain::entities::otp::OtpPurpose;
use tm_core::repositories::MockOtpRepository;
use tm_core::services::verification::{
    DeliveryMode, VerificationService, VerificationServiceConfig, OTP_TEMPLATE,
};
use tm_infra::email::MockEmailService;

fn service(mailer: Arc<MockEmailService>) -> VerificationService {
    VerificationService::new(
        Arc::new(MockOtpRepository::new()),
        mailer,
        VerificationServiceConfig {
            deterministic: false,
            delivery: DeliveryMode::Inline,
            ..Default::default()
        },
    )
}

#[tokio::test]
async fn test_emailed_code_verifies_once() {
    let mailer = Arc::new(MockEmailService::new());
    let verification = service(mailer.clone());

    let issued = verification
        .issue("asha@example.com", AccountKind::Traveler, "Asha Rao", OtpPurpose::Registration)
        .await
        .unwrap();
    assert!(issued.code.is_none());

    let email = mailer.last_to("asha@example.com").await.unwrap();
    assert_eq!(email.template, OTP_TEMPLATE);
    assert_eq!(email.data["displayName"], "Asha Rao");
    let code = email.data["code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);

    assert!(verification
        .verify("asha@example.com", &code, AccountKind::Traveler)
        .await
        .unwrap());
    assert!(!verification
        .verify("asha@example.com", &code, AccountKind::Traveler)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_code_is_scoped_to_account_kind() {
    let mailer = Arc::new(MockEmailService::new());
    let verification = service(mailer.clone());

    verification
        .issue("same@example.com", AccountKind::Guider, "Rahul", OtpPurpose::Login)
        .await
        .unwrap();
    let code = mailer.last_to("same@example.com").await.unwrap().data["code"]
        .as_str()
        .unwrap()
        .to_string();

    assert!(!verification
        .verify("same@example.com", &code, AccountKind::Traveler)
        .await
        .unwrap());
    assert!(verification
        .verify("same@example.com", &code, AccountKind::Guider)
        .await
        .unwrap());
}

#[tokio::test]
async fn test_failed_delivery_keeps_code_usable() {
    let mailer = Arc::new(MockEmailService::failing());
    let otps = Arc::new(MockOtpRepository::new());
    let verification = VerificationService::new(
        otps.clone(),
        mailer.clone(),
        VerificationServiceConfig {
            deterministic: true,
            delivery: DeliveryMode::Inline,
            ..Default::default()
        },
    );

    let issued = verification
        .issue("late@example.com", AccountKind::Traveler, "Late", OtpPurpose::Registration)
        .await
        .unwrap();

    assert!(mailer.sent().await.is_empty());
    assert_eq!(issued.code.as_deref(), Some("123456"));
    assert!(otps.get("late@example.com", AccountKind::Traveler).await.is_some());
}
