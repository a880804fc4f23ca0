//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};

const DEFAULT_SECRET: &str = "your-secret-key-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// JWT secret key for signing tokens (HS256)
    pub secret: String,

    /// Session token expiry time in seconds
    pub session_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            session_token_expiry: 7 * 86400, // 7 days
            issuer: String::from("tourmate"),
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Set session token expiry in hours
    pub fn with_expiry_hours(mut self, hours: i64) -> Self {
        self.session_token_expiry = hours * 3600;
        self
    }

    /// Check if using default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,

    /// Shared key for the administrative routes. Unset disables them.
    #[serde(default)]
    pub admin_api_key: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            bcrypt_cost: 10,
            admin_api_key: None,
        }
    }
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mut jwt = std::env::var("JWT_SECRET")
            .map(JwtConfig::new)
            .unwrap_or_default();
        if let Some(hours) = std::env::var("JWT_EXPIRY_HOURS")
            .ok()
            .and_then(|h| h.parse().ok())
        {
            jwt = jwt.with_expiry_hours(hours);
        }
        if let Ok(issuer) = std::env::var("JWT_ISSUER") {
            jwt.issuer = issuer;
        }

        let bcrypt_cost = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|c| c.parse().ok())
            .map(|c: u32| c.max(defaults.bcrypt_cost))
            .unwrap_or(defaults.bcrypt_cost);

        let admin_api_key = std::env::var("ADMIN_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        Self {
            jwt,
            bcrypt_cost,
            admin_api_key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_secret_detection() {
        assert!(JwtConfig::default().is_using_default_secret());
        assert!(!JwtConfig::new("another-secret").is_using_default_secret());
    }

    #[test]
    fn test_expiry_hours() {
        let config = JwtConfig::new("s").with_expiry_hours(2);
        assert_eq!(config.session_token_expiry, 7200);
    }
}
