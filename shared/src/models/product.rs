//! Product catalogue models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stock-keeping unit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    /// Human-chosen unique code (e.g., "MUN-001")
    pub sku: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub product_type: ProductType,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "codigoBarras")]
    pub barcode: Option<String>,
    #[serde(rename = "categoriaId")]
    pub category_id: Option<Uuid>,
    #[serde(rename = "precoCusto")]
    pub cost_price: Decimal,
    #[serde(rename = "precoVenda")]
    pub sale_price: Decimal,
    #[serde(rename = "lote")]
    pub batch: Option<String>,
    #[serde(rename = "enderecoLocalizacao")]
    pub location_address: Option<String>,
    #[serde(rename = "fornecedorId")]
    pub supplier_id: Option<Uuid>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Description used in audit entries, e.g. `[MUN-001] Suga Suga`
    pub fn audit_description(&self) -> String {
        format!("[{}] {}", self.sku, self.name)
    }
}

/// Whether a product is sold as-is or consumed in production
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    #[default]
    Finished,
    RawMaterial,
}

impl ProductType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductType::Finished => "FINISHED",
            ProductType::RawMaterial => "RAW_MATERIAL",
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FINISHED" => Ok(ProductType::Finished),
            "RAW_MATERIAL" => Ok(ProductType::RawMaterial),
            other => Err(format!("Unknown product type: {}", other)),
        }
    }
}
