//! Stock ledger models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One quantity bucket of a product.
///
/// A product may have several records at once (on the shelf, out on a
/// demonstration loan, at another location); each acts as a separate lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockRecord {
    pub id: Uuid,
    #[serde(rename = "produtoId")]
    pub product_id: Uuid,
    /// Units on hand, never negative
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    pub status: StockStatus,
    #[serde(rename = "localizacaoId")]
    pub location_id: Option<Uuid>,
    /// User accountable for the lot (set for demonstration loans)
    #[serde(rename = "responsavelId")]
    pub responsible_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Status of a stock lot
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum StockStatus {
    /// On the shelf and free to move
    #[default]
    Available,
    /// Checked out on a demonstration loan
    OnDemonstration,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "Available",
            StockStatus::OnDemonstration => "OnDemonstration",
        }
    }
}

impl std::str::FromStr for StockStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Available" => Ok(StockStatus::Available),
            "OnDemonstration" => Ok(StockStatus::OnDemonstration),
            other => Err(format!("Unknown stock status: {}", other)),
        }
    }
}

impl std::fmt::Display for StockStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StockStatus::Available => write!(f, "Disponível"),
            StockStatus::OnDemonstration => write!(f, "Em Demonstração"),
        }
    }
}
