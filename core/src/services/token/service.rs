//! Session token issuance and verification

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::account::Account;
use crate::domain::entities::token::Claims;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Signs and verifies HS256 session tokens
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.validate_exp = true;
        validation.leeway = 0;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Session lifetime in seconds
    pub fn expires_in(&self) -> i64 {
        self.config.session_token_expiry_seconds
    }

    /// Issue a session token embedding the account's id, identity and kind
    pub fn issue(&self, account: &Account) -> Result<String, DomainError> {
        let claims = Claims::for_account(
            account,
            &self.config.issuer,
            self.config.session_token_expiry_seconds,
        );
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, event = "token_generation_failed", "Failed to sign session token");
            DomainError::Token(TokenError::TokenGenerationFailed)
        })
    }

    /// Decode and validate a session token
    ///
    /// # Errors
    /// * `TokenError::TokenExpired` - `exp` has passed
    /// * `TokenError::InvalidSignature` - Signed with another secret
    /// * `TokenError::InvalidClaims` - Wrong issuer or malformed subject
    /// * `TokenError::InvalidTokenFormat` - Anything else
    pub fn verify(&self, token: &str) -> Result<Claims, DomainError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            let err = match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::TokenExpired,
                ErrorKind::InvalidSignature => TokenError::InvalidSignature,
                ErrorKind::InvalidIssuer => TokenError::InvalidClaims,
                _ => TokenError::InvalidTokenFormat,
            };
            DomainError::Token(err)
        })?;

        if data.claims.account_id().is_none() {
            return Err(DomainError::Token(TokenError::InvalidClaims));
        }
        Ok(data.claims)
    }
}
