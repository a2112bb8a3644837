//! Audit trail models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Action recorded when a product is removed with its history
pub const PRODUCT_DELETION_ACTION: &str = "EXCLUSÃO DE PRODUTO";

/// Actor name used when the acting user cannot be resolved
pub const UNKNOWN_ACTOR: &str = "Sistema / Desconhecido";

/// Immutable record of a destructive action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLogEntry {
    pub id: Uuid,
    #[serde(rename = "acao")]
    pub action: String,
    #[serde(rename = "itemNome")]
    pub item_description: String,
    #[serde(rename = "usuarioNome")]
    pub actor_name: String,
    #[serde(rename = "motivo")]
    pub reason: String,
    #[serde(rename = "dataHora")]
    pub occurred_at: DateTime<Utc>,
}

/// Display name for the actor of an audited action
pub fn actor_display_name(resolved: Option<&str>) -> String {
    resolved.unwrap_or(UNKNOWN_ACTOR).to_string()
}
