//! Configuration for the token service

use tm_shared::config::JwtConfig;

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Session token lifetime in seconds
    pub session_token_expiry_seconds: i64,
    /// Value of the `iss` claim
    pub issuer: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        JwtConfig::default().into()
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(jwt: JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret,
            session_token_expiry_seconds: jwt.session_token_expiry,
            issuer: jwt.issuer,
        }
    }
}
