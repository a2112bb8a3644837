//! Stock movement engine
//!
//! A movement reads one stock record, checks it against the requested
//! action, rewrites its quantity and appends an immutable ledger entry. All
//! of it happens in one transaction with the stock row locked, so a failed
//! check leaves neither a changed balance nor an orphan ledger entry.

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{plan_movement, require_text, StockStatus};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{MovementRecord, MovementRow, StockRecord, StockRow};
use crate::services::SequenceService;

/// Movement engine
#[derive(Clone)]
pub struct MovementService {
    db: PgPool,
}

/// Input for applying a movement
#[derive(Debug, Deserialize)]
pub struct ApplyMovementInput {
    #[serde(rename = "produtoId")]
    pub product_id: Uuid,
    #[serde(rename = "usuarioId")]
    pub user_id: Uuid,
    #[serde(rename = "estoqueId")]
    pub stock_record_id: Uuid,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "tipoAcao")]
    pub action_type: String,
    #[serde(rename = "observacao")]
    pub note: Option<String>,
    /// Only kept for demonstration loans
    #[serde(rename = "dataPrevisaoRetorno")]
    pub expected_return_date: Option<NaiveDate>,
}

impl MovementService {
    /// Create a new MovementService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Apply a movement to a stock record and record it in the ledger
    pub async fn apply_movement(&self, input: ApplyMovementInput) -> AppResult<MovementRecord> {
        let mut tx = self.db.begin().await?;

        // Lock the source record for the rest of the transaction
        let stock: StockRecord = sqlx::query_as::<_, StockRow>(
            r#"
            SELECT id, product_id, quantity, status, location_id, responsible_id,
                   created_at, updated_at
            FROM stock_records
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(input.stock_record_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Estoque".to_string()))?
        .try_into()?;

        if stock.product_id != input.product_id {
            return Err(AppError::InvalidArgument(
                "O estoque informado não pertence ao produto.".to_string(),
            ));
        }

        let plan = plan_movement(stock.quantity, input.quantity, &input.action_type)?;

        let year = SequenceService::current_year();
        let code = SequenceService::next_code(&mut tx, plan.document_type, year).await?;

        sqlx::query(
            r#"
            UPDATE stock_records
            SET quantity = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(plan.balance_after)
        .bind(stock.id)
        .execute(&mut *tx)
        .await?;

        if plan.opens_demonstration_lot {
            sqlx::query(
                r#"
                INSERT INTO stock_records (product_id, quantity, status, responsible_id)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(stock.product_id)
            .bind(input.quantity)
            .bind(StockStatus::OnDemonstration.as_str())
            .bind(input.user_id)
            .execute(&mut *tx)
            .await?;
        }

        let note = require_text(input.note.as_deref()).unwrap_or_else(|| plan.action.default_note());
        let expected_return_date = if plan.opens_demonstration_lot {
            input.expected_return_date
        } else {
            None
        };

        let row = sqlx::query_as::<_, MovementRow>(
            r#"
            INSERT INTO movements (product_id, user_id, quantity, action_type, code, note,
                                   expected_return_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, product_id, user_id, quantity, action_type, code, note,
                      expected_return_date, occurred_at
            "#,
        )
        .bind(stock.product_id)
        .bind(input.user_id)
        .bind(plan.signed_quantity)
        .bind(plan.action.label())
        .bind(&code)
        .bind(&note)
        .bind(expected_return_date)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            product_id = %stock.product_id,
            stock_record_id = %stock.id,
            code = %code,
            action = %plan.action,
            balance_before = plan.balance_before,
            balance_after = plan.balance_after,
            "Stock movement recorded"
        );

        Ok(row.into())
    }

    /// List the ledger, newest first
    pub async fn list_movements(&self) -> AppResult<Vec<MovementRecord>> {
        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, product_id, user_id, quantity, action_type, code, note,
                   expected_return_date, occurred_at
            FROM movements
            ORDER BY occurred_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Ledger entries for one product, newest first
    pub async fn get_product_movements(&self, product_id: Uuid) -> AppResult<Vec<MovementRecord>> {
        let rows = sqlx::query_as::<_, MovementRow>(
            r#"
            SELECT id, product_id, user_id, quantity, action_type, code, note,
                   expected_return_date, occurred_at
            FROM movements
            WHERE product_id = $1
            ORDER BY occurred_at DESC
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
