//! HTTP handlers for products

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::Product;
use crate::services::product::{DeleteProductInput, ProductInput, ProductService};
use crate::AppState;

pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let service = ProductService::new(state.db);
    let products = service.list_products().await?;
    Ok(Json(products))
}

pub async fn create_product(
    State(state): State<AppState>,
    AppJson(input): AppJson<ProductInput>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let service = ProductService::new(state.db);
    let product = service.create_product(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn get_product(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<Uuid>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.get_product(product_id).await?;
    Ok(Json(product))
}

pub async fn update_product(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<Uuid>,
    AppJson(input): AppJson<ProductInput>,
) -> AppResult<Json<Product>> {
    let service = ProductService::new(state.db);
    let product = service.update_product(product_id, input).await?;
    Ok(Json(product))
}

/// Delete a product with its history. The reason and acting user come in
/// the request body; a request without a usable body has no reason.
pub async fn delete_product(
    State(state): State<AppState>,
    AppPath(product_id): AppPath<Uuid>,
    body: Option<AppJson<DeleteProductInput>>,
) -> AppResult<StatusCode> {
    let input = body.map(|AppJson(input)| input).unwrap_or_default();
    let service = ProductService::new(state.db);
    service.delete_product(product_id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}
