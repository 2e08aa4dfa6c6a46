//! Kitten API Endpoints
//! Mission: Owner-gated fetch, create and delete

use crate::app::AppState;
use crate::auth::Identity;
use crate::error::ApiError;
use crate::kittens::models::{Kitten, KittenView, NewKitten};
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use tracing::{info, warn};

/// Fetch kitten - GET /kittens/:id
///
/// `id` names the owner: only the caller with that user id may read it.
pub async fn get_kitten(
    State(state): State<AppState>,
    identity: Identity,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<KittenView>, ApiError> {
    let Path(id) = path?;
    require_same_user(&identity, id)?;

    let kitten = state
        .kittens
        .find_first_by_owner(identity.user_id)?
        .ok_or(ApiError::NotFound("Kitten not found"))?;

    Ok(Json(KittenView::from(kitten)))
}

/// Create kitten - POST /kittens
pub async fn create_kitten(
    State(state): State<AppState>,
    identity: Identity,
    payload: Result<Json<NewKitten>, JsonRejection>,
) -> Result<(StatusCode, Json<Kitten>), ApiError> {
    let Json(new) = payload?;
    if new.name.trim().is_empty() || new.color.trim().is_empty() {
        return Err(ApiError::Validation(
            "name, age and color are required".to_string(),
        ));
    }

    let kitten = state.kittens.create(identity.user_id, &new)?;

    info!(
        "🐱 Kitten {} ({}) created for {}",
        kitten.name, kitten.id, identity.username
    );

    Ok((StatusCode::CREATED, Json(kitten)))
}

/// Delete kitten - DELETE /kittens/:id
///
/// `id` is both the kitten id and the caller's user id: the path must name the
/// caller, and the kitten with that row id must be owned by the caller. A user
/// can therefore only delete the kitten whose id equals their own user id.
pub async fn delete_kitten(
    State(state): State<AppState>,
    identity: Identity,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = path?;
    require_same_user(&identity, id)?;

    let kitten = state
        .kittens
        .find_by_id(id)?
        .ok_or(ApiError::NotFound("Kitten not found"))?;

    if kitten.owner_id != identity.user_id {
        warn!(
            "User {} tried to delete kitten {} owned by {}",
            identity.user_id, kitten.id, kitten.owner_id
        );
        return Err(ApiError::Authorization);
    }

    // Lost a race with a concurrent delete
    if !state.kittens.delete(kitten.id)? {
        return Err(ApiError::NotFound("Kitten not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}

fn require_same_user(identity: &Identity, path_id: i64) -> Result<(), ApiError> {
    if identity.user_id != path_id {
        return Err(ApiError::Authorization);
    }
    Ok(())
}
