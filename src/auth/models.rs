//! Authentication Models
//! Mission: Define user, claim and credential data structures

use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // bcrypt hash - never serialize
    pub created_at: String,
}

/// JWT Claims payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    pub sub: String, // subject (decimal user id)
    pub username: String,
    pub iat: usize, // issued-at timestamp
    pub exp: usize, // expiration timestamp
}

/// Authenticated caller attached to a request by the auth middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: i64,
    pub username: String,
}

impl Identity {
    /// Build an identity from verified claims. `None` if `sub` is not a user id.
    pub fn from_claims(claims: &Claims) -> Option<Self> {
        let user_id = claims.sub.parse::<i64>().ok()?;
        Some(Self {
            user_id,
            username: claims.username.clone(),
        })
    }
}

/// Register / login request body
#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

/// Register / login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub message: String,
}

impl TokenResponse {
    pub fn success(token: String) -> Self {
        Self {
            token,
            message: "success".to_string(),
        }
    }
}
