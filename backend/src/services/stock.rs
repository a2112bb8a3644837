//! Stock records
//!
//! Balances change only through the movement engine and order receipts.
//! This service lists records and opens new ones.

use serde::Deserialize;
use shared::{validate_opening_quantity, StockStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{StockRecord, StockRow};

#[derive(Clone)]
pub struct StockService {
    db: PgPool,
}

/// Input for opening a stock record
#[derive(Debug, Deserialize)]
pub struct OpenStockInput {
    #[serde(rename = "produtoId")]
    pub product_id: Uuid,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    pub status: Option<StockStatus>,
    #[serde(rename = "localizacaoId")]
    pub location_id: Option<Uuid>,
    #[serde(rename = "responsavelId")]
    pub responsible_id: Option<Uuid>,
}

impl StockService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all stock records, grouped by product
    pub async fn list_stock(&self) -> AppResult<Vec<StockRecord>> {
        let rows = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT id, product_id, quantity, status, location_id, responsible_id,
                   created_at, updated_at
            FROM stock_records
            ORDER BY product_id, created_at
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Open a new stock record with its opening balance
    pub async fn open_stock(&self, input: OpenStockInput) -> AppResult<StockRecord> {
        validate_opening_quantity(input.quantity)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let row = sqlx::query_as::<_, StockRow>(
            r#"
            INSERT INTO stock_records (product_id, quantity, status, location_id, responsible_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, product_id, quantity, status, location_id, responsible_id,
                      created_at, updated_at
            "#,
        )
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.status.unwrap_or_default().as_str())
        .bind(input.location_id)
        .bind(input.responsible_id)
        .fetch_one(&self.db)
        .await?;

        tracing::info!(
            stock_id = %row.id,
            product_id = %row.product_id,
            quantity = row.quantity,
            "Stock record opened"
        );
        row.try_into()
    }
}
