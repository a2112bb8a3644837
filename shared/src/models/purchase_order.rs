//! Purchase order models

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An order placed with a supplier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseOrder {
    pub id: Uuid,
    /// Sequential code (e.g., "PC000124")
    #[serde(rename = "codigo")]
    pub code: String,
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
    pub status: OrderStatus,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "recebidoEm")]
    pub received_at: Option<DateTime<Utc>>,
}

/// Lifecycle of a purchase order. `Received` is terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Received,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Received => "Received",
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Received" => Ok(OrderStatus::Received),
            other => Err(format!("Unknown order status: {}", other)),
        }
    }
}
