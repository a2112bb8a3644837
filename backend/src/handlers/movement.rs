//! HTTP handlers for stock movements

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::MovementRecord;
use crate::services::movement::{ApplyMovementInput, MovementService};
use crate::AppState;

/// Apply a movement to a stock record
pub async fn apply_movement(
    State(state): State<AppState>,
    AppJson(input): AppJson<ApplyMovementInput>,
) -> AppResult<(StatusCode, Json<MovementRecord>)> {
    let service = MovementService::new(state.db);
    let movement = service.apply_movement(input).await?;
    Ok((StatusCode::CREATED, Json(movement)))
}

/// List movements, newest first
pub async fn list_movements(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MovementRecord>>> {
    let service = MovementService::new(state.db);
    let movements = service.list_movements().await?;
    Ok(Json(movements))
}

/// Movement history of a single product
pub async fn get_product_movements(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<Uuid>,
) -> AppResult<Json<Vec<MovementRecord>>> {
    let service = MovementService::new(state.db);
    let movements = service.get_product_movements(product_id).await?;
    Ok(Json(movements))
}
