//! Purchase order and product removal tests
//!
//! Property-based and unit tests for:
//! - Receiving an order at most once
//! - Receipt crediting the available lot by exactly the ordered quantity
//! - Audit descriptions and actor fallback for product removal

use proptest::prelude::*;
use shared::{
    actor_display_name, plan_receipt, receipt_note, require_text, validate_order_quantity,
    LedgerError, OrderStatus, StockCredit, PRODUCT_DELETION_ACTION, UNKNOWN_ACTOR,
};

// ============================================================================
// Property Test Strategies
// ============================================================================

fn order_code_strategy() -> impl Strategy<Value = String> {
    (1u32..=9_999, 20u32..30).prop_map(|(seq, yy)| format!("PC{:04}{:02}", seq, yy))
}

fn available_strategy() -> impl Strategy<Value = Option<(u32, i32)>> {
    prop::option::of((any::<u32>(), 0i32..1_000_000))
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A pending order credits exactly its quantity to available stock
    #[test]
    fn prop_receipt_credits_order_quantity(
        code in order_code_strategy(),
        quantity in 1i32..10_000,
        available in available_strategy(),
    ) {
        let credit = plan_receipt(OrderStatus::Pending, &code, quantity, available).unwrap();
        match (credit, available) {
            (StockCredit::Increment { stock_id, new_quantity }, Some((id, current))) => {
                prop_assert_eq!(stock_id, id);
                prop_assert_eq!(new_quantity - current, quantity);
            }
            (StockCredit::OpenLot { quantity: opened }, None) => {
                prop_assert_eq!(opened, quantity);
            }
            (credit, available) => {
                prop_assert!(false, "mismatched plan {:?} for {:?}", credit, available);
            }
        }
    }

    /// A received order is refused no matter the stock on hand
    #[test]
    fn prop_received_order_is_refused(
        code in order_code_strategy(),
        quantity in 1i32..10_000,
        available in available_strategy(),
    ) {
        prop_assert_eq!(
            plan_receipt(OrderStatus::Received, &code, quantity, available),
            Err(LedgerError::AlreadyReceived(code.clone()))
        );
    }

    /// Whitespace-only deletion reasons count as missing
    #[test]
    fn prop_blank_reason_is_missing(reason in "[ \t\n]{0,10}") {
        prop_assert_eq!(require_text(Some(reason.as_str())), None);
    }

    #[test]
    fn prop_reason_is_trimmed(reason in "[A-Za-z][A-Za-z ]{0,30}[A-Za-z]") {
        let padded = format!("  {}\t", reason);
        prop_assert_eq!(require_text(Some(padded.as_str())), Some(reason));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_receive_order_example() {
        // 8 units on the shelf, order of 20 arrives
        let credit = plan_receipt(OrderStatus::Pending, "PC000124", 20, Some((1u32, 8))).unwrap();
        assert_eq!(
            credit,
            StockCredit::Increment {
                stock_id: 1,
                new_quantity: 28
            }
        );
        assert_eq!(receipt_note("PC000124"), "Recebimento via Pedido PC000124");
    }

    #[test]
    fn test_order_quantity_must_be_positive() {
        assert!(validate_order_quantity(0).is_err());
        assert!(validate_order_quantity(-4).is_err());
        assert!(validate_order_quantity(1).is_ok());
    }

    #[test]
    fn test_actor_fallback() {
        assert_eq!(actor_display_name(Some("Ana Souza")), "Ana Souza");
        assert_eq!(actor_display_name(None), UNKNOWN_ACTOR);
        assert_eq!(UNKNOWN_ACTOR, "Sistema / Desconhecido");
    }

    #[test]
    fn test_deletion_action_text() {
        assert_eq!(PRODUCT_DELETION_ACTION, "EXCLUSÃO DE PRODUTO");
    }
}
