//! Main account service implementation

use std::sync::Arc;
use tm_shared::validation::{mask_email, normalize_email, not_blank};
use uuid::Uuid;

use crate::domain::entities::account::{
    Account, AccountKind, AccountProfile, ApprovalStatus, Credentialed, Guider, GuiderProfile,
    Traveler, DEFAULT_CURRENCY,
};
use crate::domain::entities::otp::OtpPurpose;
use crate::domain::value_objects::{AuthOutcome, ResendReceipt};
use crate::errors::{AuthError, DomainError, DomainResult, FieldViolation};
use crate::repositories::AccountRepository;
use crate::services::token::TokenService;
use crate::services::verification::VerificationService;

use super::config::AccountServiceConfig;
use super::types::{Registration, MIN_PASSWORD_LENGTH};

/// Account service for the full credential and verification flow
pub struct AccountService {
    /// Credential store
    account_repository: Arc<dyn AccountRepository>,
    /// OTP issuance and checks
    verification_service: Arc<VerificationService>,
    /// Session token signing
    token_service: Arc<TokenService>,
    /// Service configuration
    config: AccountServiceConfig,
}

impl AccountService {
    /// Create a new account service
    ///
    /// # Arguments
    ///
    /// * `account_repository` - Storage for both account kinds
    /// * `verification_service` - Passcode workflow
    /// * `token_service` - Session JWT issuance
    /// * `config` - Service configuration
    pub fn new(
        account_repository: Arc<dyn AccountRepository>,
        verification_service: Arc<VerificationService>,
        token_service: Arc<TokenService>,
        config: AccountServiceConfig,
    ) -> Self {
        Self {
            account_repository,
            verification_service,
            token_service,
            config,
        }
    }

    /// Register a new, unverified account and send its first passcode
    ///
    /// This method:
    /// 1. Validates the request fields
    /// 2. Rejects an email already used by an account of the same kind
    /// 3. Hashes the password off the async executor
    /// 4. Persists the account with kind-specific defaults
    /// 5. Issues a registration passcode
    ///
    /// # Returns
    ///
    /// * `Ok(AuthOutcome)` - Pending verification, never carrying a token
    /// * `Err(DomainError)` - Validation failure or `Conflict` on a duplicate email
    pub async fn register(&self, registration: Registration) -> DomainResult<AuthOutcome> {
        let violations = registration.violations();
        if !violations.is_empty() {
            return Err(DomainError::invalid_fields(violations));
        }

        let kind = registration.kind();
        let email = normalize_email(registration.email());

        if self
            .account_repository
            .find_by_email(kind, &email)
            .await?
            .is_some()
        {
            tracing::info!(
                email = %mask_email(&email),
                kind = %kind,
                event = "registration_conflict",
                "Registration attempted with existing email"
            );
            return Err(DomainError::conflict("User already exists"));
        }

        let password_hash = self.hash_password(registration.password()).await?;
        let account = build_account(registration, email.clone(), password_hash);
        let account = self.account_repository.create(account).await?;

        tracing::info!(
            account_id = %account.id(),
            email = %mask_email(&email),
            kind = %kind,
            event = "account_registered",
            "New account registered"
        );

        let issued = self
            .verification_service
            .issue(&email, kind, &account.display_name(), OtpPurpose::Registration)
            .await?;

        Ok(AuthOutcome::pending_verification(
            account.profile(),
            true,
            issued.code,
        ))
    }

    /// Password login
    ///
    /// Unverified accounts get no token. A passcode is sent only if no live
    /// one exists, and `otp_sent` reports whether that happened.
    ///
    /// # Errors
    ///
    /// * `AuthError::InvalidCredentials` - Unknown email or wrong password
    /// * `AuthError::AccountDeactivated` - Account disabled by an administrator
    pub async fn login(
        &self,
        kind: AccountKind,
        email: &str,
        password: &str,
    ) -> DomainResult<AuthOutcome> {
        let email = normalize_email(email);

        let Some(account) = self.account_repository.find_by_email(kind, &email).await? else {
            tracing::warn!(
                email = %mask_email(&email),
                kind = %kind,
                event = "login_failed",
                reason = "unknown_account",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        };

        if !account.is_active() {
            tracing::warn!(
                account_id = %account.id(),
                event = "login_failed",
                reason = "deactivated",
                "Login failed"
            );
            return Err(AuthError::AccountDeactivated.into());
        }

        if !self
            .verify_password(password, account.password_hash())
            .await?
        {
            tracing::warn!(
                account_id = %account.id(),
                event = "login_failed",
                reason = "password_mismatch",
                "Login failed"
            );
            return Err(AuthError::InvalidCredentials.into());
        }

        if !account.is_verified() {
            let status = self
                .verification_service
                .ensure_live_otp(&email, kind, &account.display_name(), OtpPurpose::Login)
                .await?;
            tracing::info!(
                account_id = %account.id(),
                otp_sent = !status.has_valid_otp,
                event = "login_requires_verification",
                "Login deferred until verification"
            );
            return Ok(AuthOutcome::pending_verification(
                account.profile(),
                !status.has_valid_otp,
                status.code,
            ));
        }

        let token = self.token_service.issue(&account)?;
        tracing::info!(
            account_id = %account.id(),
            kind = %kind,
            event = "login_succeeded",
            "Account logged in"
        );
        Ok(AuthOutcome::authenticated(account.profile(), token))
    }

    /// Consume a passcode, mark the account verified and start a session
    ///
    /// An unknown email fails exactly like a wrong code.
    pub async fn complete_verification(
        &self,
        kind: AccountKind,
        email: &str,
        code: &str,
    ) -> DomainResult<AuthOutcome> {
        let email = normalize_email(email);

        let Some(mut account) = self.account_repository.find_by_email(kind, &email).await? else {
            return Err(AuthError::InvalidOrExpiredOtp.into());
        };

        if !self.verification_service.verify(&email, code, kind).await? {
            return Err(AuthError::InvalidOrExpiredOtp.into());
        }

        if !account.is_verified() {
            account = self
                .account_repository
                .mark_verified(kind, account.id())
                .await?;
            tracing::info!(
                account_id = %account.id(),
                kind = %kind,
                event = "account_verified",
                "Account verified"
            );
        }

        let token = self.token_service.issue(&account)?;
        Ok(AuthOutcome::authenticated(account.profile(), token))
    }

    /// Re-send a passcode
    ///
    /// The receipt is identical whether or not a code was issued. Only an
    /// existing, unverified account receives mail.
    pub async fn resend_otp(
        &self,
        kind: AccountKind,
        email: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<ResendReceipt> {
        let email = normalize_email(email);

        match self.account_repository.find_by_email(kind, &email).await? {
            Some(account) if !account.is_verified() => {
                self.verification_service
                    .issue(&email, kind, &account.display_name(), purpose)
                    .await?;
            }
            _ => {
                tracing::debug!(
                    email = %mask_email(&email),
                    kind = %kind,
                    event = "otp_resend_skipped",
                    "No unverified account for resend"
                );
            }
        }

        Ok(ResendReceipt {
            otp_sent: true,
            expires_in_minutes: self.verification_service.expiration_minutes(),
        })
    }

    /// Replace the password after checking the current one
    ///
    /// # Errors
    ///
    /// * `DomainError::Validation` - Missing fields, short new password, or
    ///   "Invalid old password"
    /// * `DomainError::NotFound` - No such account
    pub async fn change_password(
        &self,
        kind: AccountKind,
        account_id: Uuid,
        old_password: &str,
        new_password: &str,
    ) -> DomainResult<()> {
        let mut violations = Vec::new();
        if !not_blank(old_password) {
            violations.push(FieldViolation::new("oldPassword", "Old password is required"));
        }
        if !not_blank(new_password) {
            violations.push(FieldViolation::new("newPassword", "New password is required"));
        } else if new_password.chars().count() < MIN_PASSWORD_LENGTH {
            violations.push(FieldViolation::new(
                "newPassword",
                format!(
                    "New password must be at least {} characters",
                    MIN_PASSWORD_LENGTH
                ),
            ));
        }
        if !violations.is_empty() {
            return Err(DomainError::invalid_fields(violations));
        }

        let account = self.require_account(kind, account_id).await?;

        if !self
            .verify_password(old_password, account.password_hash())
            .await?
        {
            return Err(DomainError::validation("Invalid old password"));
        }

        let password_hash = self.hash_password(new_password).await?;
        self.account_repository
            .set_password_hash(kind, account_id, &password_hash)
            .await?;

        tracing::info!(
            account_id = %account_id,
            kind = %kind,
            event = "password_changed",
            "Password changed"
        );
        Ok(())
    }

    /// Resolve a bearer token to a live, active account
    ///
    /// # Errors
    ///
    /// * `DomainError::Token` - Bad signature, expired, or malformed
    /// * `AuthError::SessionAccountUnavailable` - Account deleted or deactivated
    pub async fn authenticate_session(&self, token: &str) -> DomainResult<Account> {
        let claims = self.token_service.verify(token)?;
        let id = claims
            .account_id()
            .ok_or(AuthError::SessionAccountUnavailable)?;

        match self.account_repository.find_by_id(claims.kind, id).await? {
            Some(account) if account.is_active() => Ok(account),
            _ => Err(AuthError::SessionAccountUnavailable.into()),
        }
    }

    /// Sanitized profile of one account
    pub async fn get_profile(&self, kind: AccountKind, id: Uuid) -> DomainResult<AccountProfile> {
        Ok(self.require_account(kind, id).await?.profile())
    }

    /// Enable or disable an account
    pub async fn set_active(
        &self,
        kind: AccountKind,
        id: Uuid,
        active: bool,
    ) -> DomainResult<AccountProfile> {
        let account = self.account_repository.set_active(kind, id, active).await?;

        tracing::info!(
            account_id = %id,
            kind = %kind,
            active,
            event = "account_activation_changed",
            "Account activation changed"
        );
        Ok(account.profile())
    }

    /// Move a guider through administrative review
    pub async fn set_guider_approval(
        &self,
        guider_id: Uuid,
        status: ApprovalStatus,
    ) -> DomainResult<GuiderProfile> {
        let guider = self
            .account_repository
            .set_approval_status(guider_id, status)
            .await?;

        tracing::info!(
            guider_id = %guider_id,
            status = status.as_str(),
            event = "guider_approval_changed",
            "Guider approval status changed"
        );
        Ok(GuiderProfile::from(&guider))
    }

    async fn require_account(&self, kind: AccountKind, id: Uuid) -> DomainResult<Account> {
        self.account_repository
            .find_by_id(kind, id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))
    }

    async fn hash_password(&self, password: &str) -> DomainResult<String> {
        let password = password.to_string();
        let cost = self.config.bcrypt_cost;
        tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
            .await
            .map_err(|e| DomainError::internal(format!("Password hashing task failed: {}", e)))?
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))
    }

    async fn verify_password(&self, password: &str, password_hash: &str) -> DomainResult<bool> {
        let password = password.to_string();
        let password_hash = password_hash.to_string();
        let matched = tokio::task::spawn_blocking(move || {
            bcrypt::verify(password, &password_hash).unwrap_or(false)
        })
        .await
        .map_err(|e| DomainError::internal(format!("Password check task failed: {}", e)))?;
        Ok(matched)
    }
}

fn build_account(registration: Registration, email: String, password_hash: String) -> Account {
    match registration {
        Registration::Traveler(r) => {
            let mut traveler = Traveler::new(
                email,
                r.mobile,
                password_hash,
                r.first_name.trim().to_string(),
                r.last_name.trim().to_string(),
            );
            traveler.city = r.city;
            traveler.travel_styles = r.travel_styles;
            Account::Traveler(traveler)
        }
        Registration::Guider(r) => {
            let mut guider = Guider::new(
                email,
                r.mobile,
                password_hash,
                r.showcase_name.trim().to_string(),
                r.guider_type,
            );
            guider.city = r.city;
            guider.overview = r.overview;
            guider.languages = r.languages;
            guider.rates = r.rates;
            guider.currency = r
                .currency
                .filter(|c| not_blank(c))
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
            Account::Guider(guider)
        }
    }
}
