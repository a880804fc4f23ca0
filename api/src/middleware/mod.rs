pub mod admin;
pub mod auth;
pub mod cors;

pub use admin::{AdminAccess, ADMIN_KEY_HEADER};
pub use auth::{AuthContext, JwtAuth};
pub use cors::create_cors;
