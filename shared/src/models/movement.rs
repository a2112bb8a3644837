//! Stock movement models

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::codes::DocumentType;

/// Immutable ledger entry for one stock change
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementRecord {
    pub id: Uuid,
    #[serde(rename = "produtoId")]
    pub product_id: Uuid,
    #[serde(rename = "usuarioId")]
    pub user_id: Uuid,
    /// Signed change: positive for inbound, negative for outbound
    #[serde(rename = "quantidade")]
    pub quantity: i32,
    #[serde(rename = "tipoAcao")]
    pub action_type: String,
    #[serde(rename = "codigo")]
    pub code: Option<String>,
    #[serde(rename = "observacao")]
    pub note: Option<String>,
    #[serde(rename = "dataPrevisaoRetorno")]
    pub expected_return_date: Option<NaiveDate>,
    #[serde(rename = "dataHora")]
    pub occurred_at: DateTime<Utc>,
}

/// Which way a movement moves stock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Inbound,
    Outbound,
}

impl Direction {
    /// Document type codes are issued under for this direction
    pub fn document_type(&self) -> DocumentType {
        match self {
            Direction::Inbound => DocumentType::Inbound,
            Direction::Outbound => DocumentType::Outbound,
        }
    }

    /// Apply the direction's sign to an unsigned quantity
    pub fn signed(&self, quantity: i32) -> i32 {
        match self {
            Direction::Inbound => quantity,
            Direction::Outbound => -quantity,
        }
    }
}

/// Recognised movement actions.
///
/// The labels are the values operators pick in the front-end and are stored
/// verbatim in the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementAction {
    GoodsIn,
    CustomerReturn,
    InventoryAdjustmentIn,
    GoodsOut,
    InventoryAdjustmentOut,
    DemonstrationLoan,
    /// Written by purchase-order receipt only; operators cannot submit it
    PurchaseReceipt,
}

impl MovementAction {
    /// Actions accepted from the movement endpoint
    pub const OPERATOR_ACTIONS: [MovementAction; 6] = [
        MovementAction::GoodsIn,
        MovementAction::CustomerReturn,
        MovementAction::InventoryAdjustmentIn,
        MovementAction::GoodsOut,
        MovementAction::InventoryAdjustmentOut,
        MovementAction::DemonstrationLoan,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MovementAction::GoodsIn => "Entrada de mercadoria",
            MovementAction::CustomerReturn => "Devolução VIAPRO",
            MovementAction::InventoryAdjustmentIn => "Ajuste de Entrada de Inventário",
            MovementAction::GoodsOut => "Saída de mercadoria",
            MovementAction::InventoryAdjustmentOut => "Ajuste de Saída de Inventário",
            MovementAction::DemonstrationLoan => "Saída para demonstração",
            MovementAction::PurchaseReceipt => "Recebimento de Pedido de Compra",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            MovementAction::GoodsIn
            | MovementAction::CustomerReturn
            | MovementAction::InventoryAdjustmentIn
            | MovementAction::PurchaseReceipt => Direction::Inbound,
            MovementAction::GoodsOut
            | MovementAction::InventoryAdjustmentOut
            | MovementAction::DemonstrationLoan => Direction::Outbound,
        }
    }

    /// Classify an operator-submitted label. Unknown labels and the
    /// receipt-only tag yield `None`.
    pub fn classify(label: &str) -> Option<Self> {
        Self::OPERATOR_ACTIONS
            .into_iter()
            .find(|action| action.label() == label)
    }

    /// Default note when the operator leaves it blank
    pub fn default_note(&self) -> String {
        format!("{} registrada.", self.label())
    }
}

impl std::fmt::Display for MovementAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
