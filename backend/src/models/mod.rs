//! Database models for the inventory platform
//!
//! Re-exports models from the shared crate and adds the row types the
//! backend decodes query results into.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

pub use shared::models::*;

use crate::error::AppError;

#[derive(Debug, FromRow)]
pub struct StockRow {
    pub id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub status: String,
    pub location_id: Option<Uuid>,
    pub responsible_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<StockRow> for StockRecord {
    type Error = AppError;

    fn try_from(row: StockRow) -> Result<Self, Self::Error> {
        Ok(StockRecord {
            id: row.id,
            product_id: row.product_id,
            quantity: row.quantity,
            status: row.status.parse().map_err(AppError::Internal)?,
            location_id: row.location_id,
            responsible_id: row.responsible_id,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct MovementRow {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub quantity: i32,
    pub action_type: String,
    pub code: Option<String>,
    pub note: Option<String>,
    pub expected_return_date: Option<NaiveDate>,
    pub occurred_at: DateTime<Utc>,
}

impl From<MovementRow> for MovementRecord {
    fn from(row: MovementRow) -> Self {
        MovementRecord {
            id: row.id,
            product_id: row.product_id,
            user_id: row.user_id,
            quantity: row.quantity,
            action_type: row.action_type,
            code: row.code,
            note: row.note,
            expected_return_date: row.expected_return_date,
            occurred_at: row.occurred_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct PurchaseOrderRow {
    pub id: Uuid,
    pub code: String,
    pub supplier_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub total_cost: Decimal,
    pub expected_date: Option<NaiveDate>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub received_at: Option<DateTime<Utc>>,
}

impl TryFrom<PurchaseOrderRow> for PurchaseOrder {
    type Error = AppError;

    fn try_from(row: PurchaseOrderRow) -> Result<Self, Self::Error> {
        Ok(PurchaseOrder {
            id: row.id,
            code: row.code,
            supplier_id: row.supplier_id,
            product_id: row.product_id,
            quantity: row.quantity,
            total_cost: row.total_cost,
            expected_date: row.expected_date,
            status: row.status.parse().map_err(AppError::Internal)?,
            created_at: row.created_at,
            received_at: row.received_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Uuid,
    pub sku: String,
    pub name: String,
    pub product_type: String,
    pub description: Option<String>,
    pub barcode: Option<String>,
    pub category_id: Option<Uuid>,
    pub cost_price: Decimal,
    pub sale_price: Decimal,
    pub batch: Option<String>,
    pub location_address: Option<String>,
    pub supplier_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ProductRow> for Product {
    type Error = AppError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: row.id,
            sku: row.sku,
            name: row.name,
            product_type: row.product_type.parse().map_err(AppError::Internal)?,
            description: row.description,
            barcode: row.barcode,
            category_id: row.category_id,
            cost_price: row.cost_price,
            sale_price: row.sale_price,
            batch: row.batch,
            location_address: row.location_address,
            supplier_id: row.supplier_id,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
pub struct AuditLogRow {
    pub id: Uuid,
    pub action: String,
    pub item_description: String,
    pub actor_name: String,
    pub reason: String,
    pub occurred_at: DateTime<Utc>,
}

impl From<AuditLogRow> for AuditLogEntry {
    fn from(row: AuditLogRow) -> Self {
        AuditLogEntry {
            id: row.id,
            action: row.action,
            item_description: row.item_description,
            actor_name: row.actor_name,
            reason: row.reason,
            occurred_at: row.occurred_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SupplierRow {
    pub id: Uuid,
    pub company_name: String,
    pub cnpj: Option<String>,
    pub contact_name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Supplier {
            id: row.id,
            company_name: row.company_name,
            cnpj: row.cnpj,
            contact_name: row.contact_name,
            phone: row.phone,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name,
            role: row.role,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct CategoryRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            id: row.id,
            name: row.name,
            description: row.description,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct LocationRow {
    pub id: Uuid,
    pub code: String,
    pub zone: Option<String>,
    pub aisle: Option<String>,
    pub shelf: Option<String>,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            code: row.code,
            zone: row.zone,
            aisle: row.aisle,
            shelf: row.shelf,
        }
    }
}
