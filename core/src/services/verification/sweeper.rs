//! Periodic removal of expired passcodes

use std::sync::Arc;
use tm_shared::config::OtpConfig;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::DomainResult;

use super::service::VerificationService;

/// Configuration for the OTP sweeper
#[derive(Debug, Clone)]
pub struct OtpSweeperConfig {
    /// How often to sweep (in seconds)
    pub interval_seconds: u64,
    /// Whether to run at all
    pub enabled: bool,
}

impl Default for OtpSweeperConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 300,
            enabled: true,
        }
    }
}

impl From<&OtpConfig> for OtpSweeperConfig {
    fn from(otp: &OtpConfig) -> Self {
        Self {
            interval_seconds: otp.sweep_interval_seconds.max(1),
            enabled: otp.sweep_enabled,
        }
    }
}

/// Background task that calls [`VerificationService::sweep_expired`]
pub struct OtpSweeper {
    verification: Arc<VerificationService>,
    config: OtpSweeperConfig,
}

impl OtpSweeper {
    pub fn new(verification: Arc<VerificationService>, config: OtpSweeperConfig) -> Self {
        Self {
            verification,
            config,
        }
    }

    /// Run a single sweep
    pub async fn run_once(&self) -> DomainResult<u64> {
        if !self.config.enabled {
            return Ok(0);
        }
        let deleted = self.verification.sweep_expired().await?;
        if deleted > 0 {
            info!(deleted, event = "otp_sweep", "Deleted expired passcodes");
        }
        Ok(deleted)
    }

    /// Spawn the sweep loop; `None` when disabled
    pub fn start_background_task(self: Arc<Self>) -> Option<JoinHandle<()>> {
        if !self.config.enabled {
            warn!("OTP sweeper is disabled");
            return None;
        }

        let interval = std::time::Duration::from_secs(self.config.interval_seconds);
        Some(tokio::spawn(async move {
            info!(
                "OTP sweeper started - will run every {} seconds",
                self.config.interval_seconds
            );
            let mut timer = tokio::time::interval(interval);
            loop {
                timer.tick().await;
                if let Err(e) = self.run_once().await {
                    error!("OTP sweep failed: {}", e);
                }
            }
        }))
    }
}
