//! Categories and storage locations

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
}

/// A physical storage slot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub id: Uuid,
    /// Short code (e.g., "MUN-01")
    #[serde(rename = "codigo")]
    pub code: String,
    #[serde(rename = "zona")]
    pub zone: Option<String>,
    #[serde(rename = "corredor")]
    pub aisle: Option<String>,
    #[serde(rename = "prateleira")]
    pub shelf: Option<String>,
}
