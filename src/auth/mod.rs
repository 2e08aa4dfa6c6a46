//! Authentication Module
//! Mission: Hashed-password credentials and bearer-token identity

pub mod api;
pub mod jwt;
pub mod middleware;
pub mod models;
pub mod user_store;

pub use jwt::{TokenError, TokenService};
pub use middleware::attach_identity;
pub use models::{Claims, Identity};
pub use user_store::UserStore;
