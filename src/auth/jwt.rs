//! JWT Token Service
//! Mission: Sign and verify bearer tokens carrying a user identity

use crate::auth::models::{Claims, User};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing secret configured; every operation fails closed.
    #[error("token signing secret is not configured")]
    SecretMissing,
    #[error("invalid or expired token")]
    Invalid(#[source] jsonwebtoken::errors::Error),
    #[error("failed to sign token")]
    Signing(#[source] jsonwebtoken::errors::Error),
    /// TTL must be positive and keep `exp` inside the representable range.
    #[error("invalid token lifetime: {0}h")]
    InvalidTtl(i64),
}

/// Signs and verifies HS256 tokens with a server-held secret
pub struct TokenService {
    secret: Option<String>,
    ttl_hours: i64,
}

impl TokenService {
    /// Create a token service. A `None` or blank secret disables both signing
    /// and verification.
    pub fn new(secret: Option<String>, ttl_hours: i64) -> Self {
        let secret = secret.filter(|s| !s.trim().is_empty());
        if secret.is_none() {
            warn!("⚠️  No signing secret configured - all token operations will fail");
        }
        Self { secret, ttl_hours }
    }

    /// Sign a token for `user`
    pub fn sign(&self, user: &User) -> Result<String, TokenError> {
        let secret = self.secret.as_deref().ok_or(TokenError::SecretMissing)?;

        let now = Utc::now();
        let expiration = Duration::try_hours(self.ttl_hours)
            .filter(|ttl| *ttl > Duration::zero())
            .and_then(|ttl| now.checked_add_signed(ttl))
            .ok_or(TokenError::InvalidTtl(self.ttl_hours))?;

        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            iat: now.timestamp() as usize,
            exp: expiration.timestamp() as usize,
        };

        debug!(
            "Signing token for user {} ({}), expires in {}h",
            user.username, user.id, self.ttl_hours
        );

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(TokenError::Signing)
    }

    /// Verify a token and extract its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let secret = self.secret.as_deref().ok_or(TokenError::SecretMissing)?;

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(TokenError::Invalid)?;

        debug!("Verified token for user {}", decoded.claims.username);

        Ok(decoded.claims)
    }
}
