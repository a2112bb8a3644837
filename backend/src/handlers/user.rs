//! HTTP handlers for users and login

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::User;
use crate::services::user::{CreateUserInput, LoginInput, UpdateUserInput, UserService};
use crate::AppState;

/// Check credentials and return the user's profile
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginInput>,
) -> AppResult<Json<User>> {
    let service = UserService::new(state.db);
    let user = service.login(input).await?;
    Ok(Json(user))
}

pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let service = UserService::new(state.db);
    Ok(Json(service.list_users().await?))
}

pub async fn create_user(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateUserInput>,
) -> AppResult<(StatusCode, Json<User>)> {
    let service = UserService::new(state.db);
    let user = service.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<Uuid>,
    AppJson(input): AppJson<UpdateUserInput>,
) -> AppResult<Json<User>> {
    let service = UserService::new(state.db);
    Ok(Json(service.update_user(user_id, input).await?))
}

pub async fn delete_user(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    let service = UserService::new(state.db);
    service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
