//! Configuration for the account service

use tm_shared::config::AuthConfig;

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// bcrypt cost used for new password hashes
    pub bcrypt_cost: u32,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl From<&AuthConfig> for AccountServiceConfig {
    fn from(auth: &AuthConfig) -> Self {
        Self {
            bcrypt_cost: auth.bcrypt_cost,
        }
    }
}
