//! HTTP handlers for suppliers, categories, locations and stock records

use axum::{extract::State, http::StatusCode, Json};
use uuid::Uuid;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::models::{Category, Location, StockRecord, Supplier};
use crate::services::catalog::{CatalogService, CategoryInput, LocationInput};
use crate::services::stock::{OpenStockInput, StockService};
use crate::services::supplier::{SupplierInput, SupplierService};
use crate::AppState;

pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let service = SupplierService::new(state.db);
    Ok(Json(service.list_suppliers().await?))
}

pub async fn create_supplier(
    State(state): State<AppState>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    let service = SupplierService::new(state.db);
    let supplier = service.create_supplier(input).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

pub async fn update_supplier(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<Uuid>,
    AppJson(input): AppJson<SupplierInput>,
) -> AppResult<Json<Supplier>> {
    let service = SupplierService::new(state.db);
    Ok(Json(service.update_supplier(supplier_id, input).await?))
}

pub async fn delete_supplier(
    State(state): State<AppState>,
    AppPath(supplier_id): AppPath<Uuid>,
) -> AppResult<StatusCode> {
    let service = SupplierService::new(state.db);
    service.delete_supplier(supplier_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let service = CatalogService::new(state.db);
    Ok(Json(service.list_categories().await?))
}

pub async fn create_category(
    State(state): State<AppState>,
    AppJson(input): AppJson<CategoryInput>,
) -> AppResult<(StatusCode, Json<Category>)> {
    let service = CatalogService::new(state.db);
    let category = service.create_category(input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

pub async fn list_locations(State(state): State<AppState>) -> AppResult<Json<Vec<Location>>> {
    let service = CatalogService::new(state.db);
    Ok(Json(service.list_locations().await?))
}

pub async fn create_location(
    State(state): State<AppState>,
    AppJson(input): AppJson<LocationInput>,
) -> AppResult<(StatusCode, Json<Location>)> {
    let service = CatalogService::new(state.db);
    let location = service.create_location(input).await?;
    Ok((StatusCode::CREATED, Json(location)))
}

pub async fn list_stock(State(state): State<AppState>) -> AppResult<Json<Vec<StockRecord>>> {
    let service = StockService::new(state.db);
    Ok(Json(service.list_stock().await?))
}

/// Open a stock record with an opening balance
pub async fn open_stock(
    State(state): State<AppState>,
    AppJson(input): AppJson<OpenStockInput>,
) -> AppResult<(StatusCode, Json<StockRecord>)> {
    let service = StockService::new(state.db);
    let record = service.open_stock(input).await?;
    Ok((StatusCode::CREATED, Json(record)))
}
