//! Main verification service implementation

use chrono::{DateTime, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, Rng};
use serde_json::json;
use std::sync::Arc;
use tm_shared::validation::mask_email;

use crate::domain::entities::account::AccountKind;
use crate::domain::entities::otp::{OtpPurpose, OtpRecord, OTP_LENGTH};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::OtpRepository;

use super::config::{DeliveryMode, VerificationServiceConfig};
use super::traits::NotificationServiceTrait;
use super::types::{IssueResult, OtpStatus, OTP_TEMPLATE};

/// Verification service for issuing and checking email passcodes
pub struct VerificationService {
    /// OTP ledger
    otp_repository: Arc<dyn OtpRepository>,
    /// Email delivery
    notifier: Arc<dyn NotificationServiceTrait>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl VerificationService {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `otp_repository` - Storage for issued passcodes
    /// * `notifier` - Email delivery collaborator
    /// * `config` - Service configuration
    pub fn new(
        otp_repository: Arc<dyn OtpRepository>,
        notifier: Arc<dyn NotificationServiceTrait>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            otp_repository,
            notifier,
            config,
        }
    }

    /// Minutes an issued passcode stays valid
    pub fn expiration_minutes(&self) -> i64 {
        self.config.code_expiration_minutes
    }

    /// Issue a passcode for `(identifier, account_kind)`
    ///
    /// This method:
    /// 1. Picks the fixed code in deterministic mode, otherwise a random one
    /// 2. Replaces any existing record for the pair in one upsert
    /// 3. Requests the email; delivery failures are logged only
    ///
    /// # Returns
    ///
    /// * `Ok(IssueResult)` - Expiry, plus the code in deterministic mode
    /// * `Err(DomainError)` - The ledger write failed
    pub async fn issue(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        display_name: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<IssueResult> {
        let code = if self.config.deterministic {
            self.config.fixed_code.clone()
        } else {
            Self::generate_secure_code()
        };

        let record = OtpRecord::issue(
            identifier.to_string(),
            account_kind,
            code.clone(),
            purpose,
            Utc::now(),
            self.config.code_expiration_minutes,
        );
        let expires_at = record.expires_at;

        self.otp_repository.upsert(record).await.map_err(|e| {
            tracing::error!(
                identifier = %mask_email(identifier),
                kind = %account_kind,
                error = %e,
                event = "otp_storage_failed",
                "Failed to store passcode"
            );
            e
        })?;

        tracing::info!(
            identifier = %mask_email(identifier),
            kind = %account_kind,
            purpose = purpose.as_str(),
            event = "otp_issued",
            "Issued new passcode"
        );

        let data = json!({
            "displayName": display_name,
            "code": code,
            "purpose": purpose.as_str(),
            "expiresInMinutes": self.config.code_expiration_minutes,
        });
        self.dispatch(identifier.to_string(), data).await;

        Ok(IssueResult {
            expires_at,
            code: self.config.deterministic.then_some(code),
        })
    }

    /// Verify a passcode now. See [`VerificationService::verify_at`].
    pub async fn verify(
        &self,
        identifier: &str,
        code: &str,
        account_kind: AccountKind,
    ) -> DomainResult<bool> {
        self.verify_at(identifier, code, account_kind, Utc::now()).await
    }

    /// Verify a passcode as of `now`
    ///
    /// A match against a live record consumes it. Wrong, expired, and missing
    /// codes all yield `Ok(false)` without touching the ledger.
    pub async fn verify_at(
        &self,
        identifier: &str,
        code: &str,
        account_kind: AccountKind,
        now: DateTime<Utc>,
    ) -> DomainResult<bool> {
        if code.len() != OTP_LENGTH || !code.chars().all(|c| c.is_ascii_digit()) {
            tracing::warn!(
                identifier = %mask_email(identifier),
                event = "invalid_code_format",
                code_length = code.len(),
                "Malformed passcode provided"
            );
            return Ok(false);
        }

        let Some(record) = self
            .otp_repository
            .find_live(identifier, account_kind, now)
            .await?
        else {
            tracing::warn!(
                identifier = %mask_email(identifier),
                kind = %account_kind,
                event = "otp_verification_failed",
                "No live passcode for identifier"
            );
            return Ok(false);
        };

        if !Self::constant_time_compare(&record.code, code) {
            tracing::warn!(
                identifier = %mask_email(identifier),
                kind = %account_kind,
                event = "otp_verification_failed",
                "Passcode mismatch"
            );
            return Ok(false);
        }

        // A concurrent verification or re-issue may have replaced the record
        let consumed = self
            .otp_repository
            .consume(identifier, account_kind, &record.code)
            .await?;

        if consumed {
            tracing::info!(
                identifier = %mask_email(identifier),
                kind = %account_kind,
                event = "otp_verified",
                "Passcode verified and consumed"
            );
        }
        Ok(consumed)
    }

    /// Make sure the pair has a live passcode, issuing one if not
    ///
    /// Used when an unverified account logs in. An existing live code is left
    /// alone so repeated logins do not flood the inbox.
    pub async fn ensure_live_otp(
        &self,
        identifier: &str,
        account_kind: AccountKind,
        display_name: &str,
        purpose: OtpPurpose,
    ) -> DomainResult<OtpStatus> {
        let live = self
            .otp_repository
            .find_live(identifier, account_kind, Utc::now())
            .await?;

        if live.is_some() {
            return Ok(OtpStatus {
                has_valid_otp: true,
                code: None,
            });
        }

        let issued = self
            .issue(identifier, account_kind, display_name, purpose)
            .await?;
        Ok(OtpStatus {
            has_valid_otp: false,
            code: issued.code,
        })
    }

    /// Delete every expired passcode. See [`VerificationService::sweep_expired_at`].
    pub async fn sweep_expired(&self) -> DomainResult<u64> {
        self.sweep_expired_at(Utc::now()).await
    }

    /// Delete every passcode with `expires_at < now`
    pub async fn sweep_expired_at(&self, now: DateTime<Utc>) -> DomainResult<u64> {
        let deleted = self.otp_repository.delete_expired(now).await?;
        tracing::debug!(deleted, event = "otp_sweep", "Swept expired passcodes");
        Ok(deleted)
    }

    /// Generate a cryptographically secure random 6-digit code
    ///
    /// Uses OsRng (OS-provided CSPRNG), uniform over `000000..=999999`.
    pub fn generate_secure_code() -> String {
        let num: u32 = OsRng.gen_range(0..1_000_000);
        format!("{:0width$}", num, width = OTP_LENGTH)
    }

    fn constant_time_compare(code_a: &str, code_b: &str) -> bool {
        if code_a.len() != code_b.len() {
            return false;
        }
        constant_time_eq(code_a.as_bytes(), code_b.as_bytes())
    }

    async fn dispatch(&self, recipient: String, data: serde_json::Value) {
        let notifier = Arc::clone(&self.notifier);
        match self.config.delivery {
            DeliveryMode::Inline => deliver(notifier, recipient, data).await,
            DeliveryMode::Background => {
                tokio::spawn(deliver(notifier, recipient, data));
            }
        }
    }
}

async fn deliver(
    notifier: Arc<dyn NotificationServiceTrait>,
    recipient: String,
    data: serde_json::Value,
) {
    match notifier.send_template(&recipient, OTP_TEMPLATE, data).await {
        Ok(message_id) => tracing::debug!(
            recipient = %mask_email(&recipient),
            message_id = %message_id,
            event = "otp_notification_sent",
            "Passcode email sent"
        ),
        Err(e) => tracing::warn!(
            recipient = %mask_email(&recipient),
            error = %e,
            event = "otp_notification_failed",
            "Failed to send passcode email"
        ),
    }
}
