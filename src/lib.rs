//! Cyber Kittens
//!
//! Hashed-password registration and login issuing bearer tokens, plus an
//! owner-gated kitten collection.

pub mod app;
pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod kittens;
pub mod middleware;

pub use app::{router, AppState};
pub use config::Config;
pub use error::{ApiError, StoreError};
