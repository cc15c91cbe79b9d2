//! User CRUD endpoints.
//!
//! Each handler is a one-to-one mapping of verb+path to a single store
//! call plus status-code translation. No business logic lives here.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};
use tracing::info;

use crate::{
    AppState,
    errors::{AppError, AppResult},
    users::models::{CreateUserRequest, UpdateUserRequest, User},
};

const USER_NOT_FOUND: &str = "User not found";

pub async fn list_users_handler(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<User>> {
    match state.users.get(&id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::not_found(USER_NOT_FOUND)),
    }
}

/// Create a user. Any store-level write failure comes back as a 400 with
/// the backend's message intact.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state
        .users
        .create(request)
        .await
        .map_err(|err| AppError::bad_request(err.to_string()))?;

    info!(user_id = %user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateUserRequest>,
) -> AppResult<Json<User>> {
    match state.users.update(&id, request).await? {
        Some(user) => Ok(Json(user)),
        None => Err(AppError::not_found(USER_NOT_FOUND)),
    }
}

pub async fn delete_user_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    if state.users.delete(&id).await? {
        info!(user_id = %id, "user deleted");
        Ok(Json(json!({ "message": "User deleted successfully" })))
    } else {
        Err(AppError::not_found(USER_NOT_FOUND))
    }
}
