//! Authentication API Endpoints
//! Mission: Register and log in users, issuing bearer tokens

use crate::app::AppState;
use crate::auth::{
    models::{CredentialsRequest, TokenResponse, User},
    user_store::{hash_password, verify_password},
};
use crate::error::ApiError;
use anyhow::Context;
use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::{info, warn};

/// Register endpoint - POST /register
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;
    require_credentials(&payload)?;

    let cost = state.bcrypt_cost;
    let password = payload.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password, cost))
        .await
        .context("Password hashing task failed")??;

    let user = state.users.create(&payload.username, &password_hash)?;
    let token = issue_token(&state, &user)?;

    info!("📝 Registered user: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse::success(token)))
}

/// Login endpoint - POST /login
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, ApiError> {
    let Json(payload) = payload?;
    require_credentials(&payload)?;

    info!("🔐 Login attempt: {}", payload.username);

    let Some(user) = state.users.find_by_username(&payload.username)? else {
        warn!("❌ Login for unknown user: {}", payload.username);
        return Err(invalid_credentials());
    };

    let password = payload.password;
    let stored_hash = user.password_hash.clone();
    let valid = tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash))
        .await
        .context("Password verification task failed")??;

    if !valid {
        warn!("❌ Failed login attempt: {}", user.username);
        return Err(invalid_credentials());
    }

    let token = issue_token(&state, &user)?;

    info!("✅ Login successful: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse::success(token)))
}

fn require_credentials(payload: &CredentialsRequest) -> Result<(), ApiError> {
    if payload.username.trim().is_empty() || payload.password.is_empty() {
        return Err(ApiError::Validation(
            "username and password are required".to_string(),
        ));
    }
    Ok(())
}

fn issue_token(state: &AppState, user: &User) -> Result<String, ApiError> {
    state
        .tokens
        .sign(user)
        .map_err(|e| ApiError::Internal(e.into()))
}

fn invalid_credentials() -> ApiError {
    ApiError::Authentication("Invalid username or password")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_blank_credentials_rejected() {
        let blank_user = CredentialsRequest {
            username: "  ".to_string(),
            password: "pw".to_string(),
        };
        let blank_password = CredentialsRequest {
            username: "tom".to_string(),
            password: String::new(),
        };

        for payload in [blank_user, blank_password] {
            let err = require_credentials(&payload).unwrap_err();
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test]
    fn test_invalid_credentials_is_unauthorized() {
        assert_eq!(invalid_credentials().status(), StatusCode::UNAUTHORIZED);
    }
}
