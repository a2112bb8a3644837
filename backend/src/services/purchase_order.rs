//! Purchase-order workflow
//!
//! Orders are issued as `Pending` with a `PC` code and received exactly
//! once. Receiving credits the product's available stock and appends one
//! inbound ledger entry in the same transaction.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use shared::{
    plan_receipt, receipt_note, validate_amount, validate_order_quantity, DocumentType,
    MovementAction, OrderStatus, StockCredit, StockStatus,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{PurchaseOrder, PurchaseOrderRow};
use crate::services::email::{EmailService, PurchaseOrderNotice};
use crate::services::SequenceService;

/// Purchase-order service
#[derive(Clone)]
pub struct PurchaseOrderService {
    db: PgPool,
    mailer: Option<Arc<EmailService>>,
}

/// Input for issuing a purchase order
#[derive(Debug, Deserialize)]
pub struct IssueOrderInput {
    #[serde(rename = "fornecedorId")]
    pub supplier_id: Uuid,
    #[serde(rename = "produtoId")]
    pub product_id: Uuid,
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "custoTotal")]
    pub total_cost: Decimal,
    #[serde(rename = "dataPrevisao")]
    pub expected_date: Option<NaiveDate>,
}

/// Input for receiving a purchase order
#[derive(Debug, Deserialize)]
pub struct ReceiveOrderInput {
    #[serde(rename = "usuarioId")]
    pub user_id: Uuid,
}

impl PurchaseOrderService {
    /// Create a new PurchaseOrderService instance
    pub fn new(db: PgPool, mailer: Option<Arc<EmailService>>) -> Self {
        Self { db, mailer }
    }

    /// Issue a new order in `Pending` status and notify the supplier
    pub async fn issue_order(&self, input: IssueOrderInput) -> AppResult<PurchaseOrder> {
        validate_order_quantity(input.quantity)
            .map_err(|e| AppError::InvalidArgument(e.to_string()))?;
        validate_amount(input.total_cost).map_err(|e| AppError::InvalidArgument(e.to_string()))?;

        let mut tx = self.db.begin().await?;

        let supplier = sqlx::query_as::<_, (String, Option<String>)>(
            "SELECT company_name, email FROM suppliers WHERE id = $1",
        )
        .bind(input.supplier_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Fornecedor".to_string()))?;

        let product_name =
            sqlx::query_scalar::<_, String>("SELECT name FROM products WHERE id = $1")
                .bind(input.product_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| AppError::NotFound("Produto".to_string()))?;

        let year = SequenceService::current_year();
        let code = SequenceService::next_code(&mut tx, DocumentType::Purchase, year).await?;

        let order: PurchaseOrder = sqlx::query_as::<_, PurchaseOrderRow>(
            r#"
            INSERT INTO purchase_orders (code, supplier_id, product_id, quantity, total_cost,
                                         expected_date, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, code, supplier_id, product_id, quantity, total_cost, expected_date,
                      status, created_at, received_at
            "#,
        )
        .bind(&code)
        .bind(input.supplier_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .bind(input.total_cost)
        .bind(input.expected_date)
        .bind(OrderStatus::Pending.as_str())
        .fetch_one(&mut *tx)
        .await?
        .try_into()?;

        tx.commit().await?;

        tracing::info!(order_id = %order.id, code = %order.code, "Purchase order issued");

        self.notify_order_issued(PurchaseOrderNotice {
            order_code: order.code.clone(),
            supplier_name: supplier.0,
            supplier_email: supplier.1,
            product_name,
            quantity: order.quantity,
        });

        Ok(order)
    }

    /// Fire-and-forget notification; never blocks or fails the caller
    fn notify_order_issued(&self, notice: PurchaseOrderNotice) {
        let Some(mailer) = self.mailer.clone() else {
            tracing::debug!(code = %notice.order_code, "Email disabled, skipping notification");
            return;
        };

        tokio::spawn(async move {
            if let Err(e) = mailer.send_purchase_order_notice(&notice).await {
                tracing::warn!(
                    code = %notice.order_code,
                    error = %e,
                    "Failed to send purchase order notification"
                );
            }
        });
    }

    /// Receive a pending order: credit available stock and record the entry
    pub async fn receive_order(
        &self,
        order_id: Uuid,
        input: ReceiveOrderInput,
    ) -> AppResult<PurchaseOrder> {
        let mut tx = self.db.begin().await?;

        let order: PurchaseOrder = sqlx::query_as::<_, PurchaseOrderRow>(
            r#"
            SELECT id, code, supplier_id, product_id, quantity, total_cost, expected_date,
                   status, created_at, received_at
            FROM purchase_orders
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(order_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Pedido de compra".to_string()))?
        .try_into()?;

        let available = sqlx::query_as::<_, (Uuid, i32)>(
            r#"
            SELECT id, quantity FROM stock_records
            WHERE product_id = $1 AND status = $2
            ORDER BY created_at ASC
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .bind(order.product_id)
        .bind(StockStatus::Available.as_str())
        .fetch_optional(&mut *tx)
        .await?;

        let credit = plan_receipt(order.status, &order.code, order.quantity, available)?;

        let received: PurchaseOrder = sqlx::query_as::<_, PurchaseOrderRow>(
            r#"
            UPDATE purchase_orders
            SET status = $1, received_at = NOW()
            WHERE id = $2
            RETURNING id, code, supplier_id, product_id, quantity, total_cost, expected_date,
                      status, created_at, received_at
            "#,
        )
        .bind(OrderStatus::Received.as_str())
        .bind(order.id)
        .fetch_one(&mut *tx)
        .await?
        .try_into()?;

        match credit {
            StockCredit::Increment {
                stock_id,
                new_quantity,
            } => {
                sqlx::query(
                    "UPDATE stock_records SET quantity = $1, updated_at = NOW() WHERE id = $2",
                )
                .bind(new_quantity)
                .bind(stock_id)
                .execute(&mut *tx)
                .await?;
            }
            StockCredit::OpenLot { quantity } => {
                sqlx::query(
                    "INSERT INTO stock_records (product_id, quantity, status) VALUES ($1, $2, $3)",
                )
                .bind(order.product_id)
                .bind(quantity)
                .bind(StockStatus::Available.as_str())
                .execute(&mut *tx)
                .await?;
            }
        }

        let year = SequenceService::current_year();
        let code = SequenceService::next_code(&mut tx, DocumentType::Inbound, year).await?;

        sqlx::query(
            r#"
            INSERT INTO movements (product_id, user_id, quantity, action_type, code, note)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(order.product_id)
        .bind(input.user_id)
        .bind(order.quantity)
        .bind(MovementAction::PurchaseReceipt.label())
        .bind(&code)
        .bind(receipt_note(&order.code))
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            order_id = %received.id,
            order_code = %received.code,
            movement_code = %code,
            quantity = received.quantity,
            "Purchase order received"
        );

        Ok(received)
    }

    /// List orders, newest first
    pub async fn list_orders(&self) -> AppResult<Vec<PurchaseOrder>> {
        let rows = sqlx::query_as::<_, PurchaseOrderRow>(
            r#"
            SELECT id, code, supplier_id, product_id, quantity, total_cost, expected_date,
                   status, created_at, received_at
            FROM purchase_orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}
