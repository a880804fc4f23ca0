use jsonwebtoken::{encode, EncodingKey, Header};

use crate::domain::entities::account::{Account, AccountKind, Traveler};
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::{TokenService, TokenServiceConfig};

fn config() -> TokenServiceConfig {
    TokenServiceConfig {
        jwt_secret: "test-secret".into(),
        session_token_expiry_seconds: 3600,
        issuer: "tourmate".into(),
    }
}

fn account() -> Account {
    Traveler::new("a@x.com".into(), None, "hash".into(), "Asha".into(), "Rao".into()).into()
}

#[test]
fn test_issue_and_verify_round_trip() {
    let service = TokenService::new(config());
    let account = account();

    let token = service.issue(&account).unwrap();
    let claims = service.verify(&token).unwrap();

    assert_eq!(claims.account_id(), Some(account.id()));
    assert_eq!(claims.email, "a@x.com");
    assert_eq!(claims.kind, AccountKind::Traveler);
}

#[test]
fn test_foreign_secret_is_rejected() {
    let issuer = TokenService::new(TokenServiceConfig {
        jwt_secret: "other-secret".into(),
        ..config()
    });
    let token = issuer.issue(&account()).unwrap();

    let err = TokenService::new(config()).verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidSignature)));
}

#[test]
fn test_expired_token_is_rejected() {
    let mut claims = Claims::for_account(&account(), "tourmate", 3600);
    claims.iat -= 7200;
    claims.exp -= 7200;
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(b"test-secret"),
    )
    .unwrap();

    let err = TokenService::new(config()).verify(&token).unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::TokenExpired)));
}

#[test]
fn test_garbage_is_invalid_format() {
    let err = TokenService::new(config()).verify("not-a-jwt").unwrap_err();
    assert!(matches!(err, DomainError::Token(TokenError::InvalidTokenFormat)));
}
