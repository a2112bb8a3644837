//! HTTP handlers for purchase orders

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::PurchaseOrder;
use crate::services::purchase_order::{IssueOrderInput, PurchaseOrderService, ReceiveOrderInput};
use crate::AppState;

/// Issue a purchase order
pub async fn issue_order(
    State(state): State<AppState>,
    AppJson(input): AppJson<IssueOrderInput>,
) -> AppResult<(StatusCode, Json<PurchaseOrder>)> {
    let service = PurchaseOrderService::new(state.db, state.mailer);
    let order = service.issue_order(input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// Receive a pending order into stock
pub async fn receive_order(
    State(state): State<AppState>,
    AppPath(order_id): AppPath<Uuid>,
    AppJson(input): AppJson<ReceiveOrderInput>,
) -> AppResult<Json<PurchaseOrder>> {
    let service = PurchaseOrderService::new(state.db, state.mailer);
    let order = service.receive_order(order_id, input).await?;
    Ok(Json(order))
}

/// List purchase orders
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<PurchaseOrder>>> {
    let service = PurchaseOrderService::new(state.db, state.mailer);
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}
