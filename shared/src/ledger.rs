//! Stock ledger arithmetic
//!
//! The backend reads the current state inside a transaction, asks these
//! functions what to write, and writes exactly that. Nothing here touches
//! storage, so every rule about balances can be checked in isolation.

use thiserror::Error;

use crate::codes::DocumentType;
use crate::models::{Direction, MovementAction, OrderStatus};

/// Rule violations detected while planning a stock change
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("A quantidade deve ser um número inteiro positivo (recebido {0}).")]
    InvalidQuantity(i32),

    #[error("Tipo de ação não reconhecido pelo sistema: {0}")]
    UnknownAction(String),

    #[error("Saldo insuficiente no armazém para esta saída (disponível {available}, solicitado {requested}).")]
    InsufficientStock { available: i32, requested: i32 },

    #[error("O saldo resultante excede o limite suportado.")]
    BalanceOverflow,

    #[error("O pedido {0} já foi recebido.")]
    AlreadyReceived(String),
}

/// What a single movement will do to its source stock record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementPlan {
    pub action: MovementAction,
    pub direction: Direction,
    pub balance_before: i32,
    pub balance_after: i32,
    /// Quantity as written to the movement record
    pub signed_quantity: i32,
    pub document_type: DocumentType,
    /// A demonstration loan moves the units into a new on-loan lot
    pub opens_demonstration_lot: bool,
}

/// Validate a movement against the current balance and compute the result.
pub fn plan_movement(
    balance: i32,
    quantity: i32,
    action_label: &str,
) -> Result<MovementPlan, LedgerError> {
    if quantity <= 0 {
        return Err(LedgerError::InvalidQuantity(quantity));
    }

    let action = MovementAction::classify(action_label)
        .ok_or_else(|| LedgerError::UnknownAction(action_label.to_string()))?;
    let direction = action.direction();

    let balance_after = match direction {
        Direction::Inbound => balance
            .checked_add(quantity)
            .ok_or(LedgerError::BalanceOverflow)?,
        Direction::Outbound => {
            if balance < quantity {
                return Err(LedgerError::InsufficientStock {
                    available: balance,
                    requested: quantity,
                });
            }
            balance - quantity
        }
    };

    Ok(MovementPlan {
        action,
        direction,
        balance_before: balance,
        balance_after,
        signed_quantity: direction.signed(quantity),
        document_type: direction.document_type(),
        opens_demonstration_lot: action == MovementAction::DemonstrationLoan,
    })
}

/// How a receipt credits the product's available stock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockCredit<Id> {
    /// Top up the existing available record to `new_quantity`
    Increment { stock_id: Id, new_quantity: i32 },
    /// No available record yet; open one holding `quantity`
    OpenLot { quantity: i32 },
}

/// Decide how to receive an order.
///
/// `available` is the id and quantity of the product's existing
/// `Available` stock record, if there is one.
pub fn plan_receipt<Id>(
    status: OrderStatus,
    order_code: &str,
    order_quantity: i32,
    available: Option<(Id, i32)>,
) -> Result<StockCredit<Id>, LedgerError> {
    if status == OrderStatus::Received {
        return Err(LedgerError::AlreadyReceived(order_code.to_string()));
    }
    if order_quantity <= 0 {
        return Err(LedgerError::InvalidQuantity(order_quantity));
    }

    match available {
        Some((stock_id, current)) => current
            .checked_add(order_quantity)
            .map(|new_quantity| StockCredit::Increment {
                stock_id,
                new_quantity,
            })
            .ok_or(LedgerError::BalanceOverflow),
        None => Ok(StockCredit::OpenLot {
            quantity: order_quantity,
        }),
    }
}

/// Note written on the movement a receipt produces
pub fn receipt_note(order_code: &str) -> String {
    format!("Recebimento via Pedido {}", order_code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inbound_adds_quantity() {
        let plan = plan_movement(5, 3, "Entrada de mercadoria").unwrap();
        assert_eq!(plan.balance_after, 8);
        assert_eq!(plan.signed_quantity, 3);
        assert_eq!(plan.document_type, DocumentType::Inbound);
        assert!(!plan.opens_demonstration_lot);
    }

    #[test]
    fn test_outbound_subtracts_quantity() {
        let plan = plan_movement(5, 5, "Saída de mercadoria").unwrap();
        assert_eq!(plan.balance_after, 0);
        assert_eq!(plan.signed_quantity, -5);
        assert_eq!(plan.document_type, DocumentType::Outbound);
    }

    #[test]
    fn test_outbound_over_balance_fails() {
        let err = plan_movement(5, 10, "Saída de mercadoria").unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientStock {
                available: 5,
                requested: 10
            }
        );
    }

    #[test]
    fn test_demonstration_loan_opens_lot() {
        let plan = plan_movement(10, 4, "Saída para demonstração").unwrap();
        assert_eq!(plan.balance_after, 6);
        assert!(plan.opens_demonstration_lot);
    }

    #[test]
    fn test_unknown_action_fails() {
        assert!(matches!(
            plan_movement(10, 1, "Teleporte"),
            Err(LedgerError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_non_positive_quantity_fails() {
        assert_eq!(
            plan_movement(10, 0, "Entrada de mercadoria"),
            Err(LedgerError::InvalidQuantity(0))
        );
        assert_eq!(
            plan_movement(10, -3, "Saída de mercadoria"),
            Err(LedgerError::InvalidQuantity(-3))
        );
    }

    #[test]
    fn test_inbound_overflow_fails() {
        assert_eq!(
            plan_movement(i32::MAX, 1, "Entrada de mercadoria"),
            Err(LedgerError::BalanceOverflow)
        );
    }

    #[test]
    fn test_receipt_increments_available_lot() {
        let credit = plan_receipt(OrderStatus::Pending, "PC000124", 20, Some((7u8, 8))).unwrap();
        assert_eq!(
            credit,
            StockCredit::Increment {
                stock_id: 7,
                new_quantity: 28
            }
        );
    }

    #[test]
    fn test_receipt_opens_lot_when_none_available() {
        let credit = plan_receipt::<u8>(OrderStatus::Pending, "PC000124", 20, None).unwrap();
        assert_eq!(credit, StockCredit::OpenLot { quantity: 20 });
    }

    #[test]
    fn test_receipt_rejects_received_order() {
        assert_eq!(
            plan_receipt(OrderStatus::Received, "PC000124", 20, Some((7u8, 8))),
            Err(LedgerError::AlreadyReceived("PC000124".to_string()))
        );
    }

    #[test]
    fn test_receipt_note() {
        assert_eq!(receipt_note("PC000324"), "Recebimento via Pedido PC000324");
    }
}
