//! Error taxonomy shared by the stores and the HTTP layer.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Persistence failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username already exists: {0}")]
    DuplicateUsername(String),
    #[error("database error")]
    Database(#[from] rusqlite::Error),
}

/// Errors returned by route handlers and middleware
#[derive(Debug)]
pub enum ApiError {
    /// Missing or malformed request fields.
    Validation(String),
    Conflict(String),
    /// Missing or invalid credentials/token.
    Authentication(&'static str),
    /// Authenticated caller may not touch this resource.
    Authorization,
    NotFound(&'static str),
    Internal(anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Authentication(_) | ApiError::Authorization => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "ValidationError",
            ApiError::Conflict(_) => "ConflictError",
            ApiError::Authentication(_) => "AuthenticationError",
            ApiError::Authorization => "AuthorizationError",
            ApiError::NotFound(_) => "NotFoundError",
            ApiError::Internal(_) => "InternalError",
        }
    }

    fn message(&self) -> String {
        match self {
            ApiError::Validation(msg) | ApiError::Conflict(msg) => msg.clone(),
            ApiError::Authentication(msg) | ApiError::NotFound(msg) => (*msg).to_string(),
            ApiError::Authorization => "Not permitted to access this resource".to_string(),
            ApiError::Internal(_) => "Internal server error".to_string(),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateUsername(username) => {
                ApiError::Conflict(format!("Username '{}' is already taken", username))
            }
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(err) = &self {
            error!("SERVER ERROR: {:#}", err);
        }

        let status = self.status();
        let message = self.message();
        let body = json!({
            "error": message,
            "name": self.name(),
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::Validation("x".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::Conflict("x".into()).status(), StatusCode::CONFLICT);
        assert_eq!(
            ApiError::Authentication("x").status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::Authorization.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ApiError::NotFound("x").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_duplicate_username_maps_to_conflict() {
        let err: ApiError = StoreError::DuplicateUsername("tom".into()).into();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response =
            ApiError::Internal(anyhow::anyhow!("UNIQUE constraint failed: users.username"))
                .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json["name"], "InternalError");
        assert_eq!(json["error"], "Internal server error");
        assert_eq!(json["message"], "Internal server error");
    }

    #[tokio::test]
    async fn test_not_found_body_shape() {
        let json = body_json(ApiError::NotFound("Kitten not found").into_response()).await;
        assert_eq!(json["error"], "Kitten not found");
        assert_eq!(json["name"], "NotFoundError");
        assert_eq!(json["message"], "Kitten not found");
    }
}
