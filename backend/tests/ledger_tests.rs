//! Stock ledger tests
//!
//! Property-based and unit tests for:
//! - Balance conservation across movement sequences
//! - Rejected movements leaving the balance untouched
//! - Demonstration loans moving units between lots without loss

use proptest::prelude::*;
use shared::{plan_movement, Direction, LedgerError, MovementAction};

// ============================================================================
// Property Test Strategies
// ============================================================================

/// Any action an operator may submit
fn operator_action_strategy() -> impl Strategy<Value = MovementAction> {
    prop::sample::select(MovementAction::OPERATOR_ACTIONS.to_vec())
}

fn inbound_action_strategy() -> impl Strategy<Value = MovementAction> {
    prop_oneof![
        Just(MovementAction::GoodsIn),
        Just(MovementAction::CustomerReturn),
        Just(MovementAction::InventoryAdjustmentIn),
    ]
}

fn outbound_action_strategy() -> impl Strategy<Value = MovementAction> {
    prop_oneof![
        Just(MovementAction::GoodsOut),
        Just(MovementAction::InventoryAdjustmentOut),
        Just(MovementAction::DemonstrationLoan),
    ]
}

fn quantity_strategy() -> impl Strategy<Value = i32> {
    1i32..=500
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Final balance equals the opening balance plus the signed quantities
    /// of every accepted movement, and never goes negative.
    #[test]
    fn prop_balance_is_conserved(
        opening in 0i32..1_000,
        steps in prop::collection::vec((operator_action_strategy(), quantity_strategy()), 0..40),
    ) {
        let mut balance = opening;
        let mut ledger_sum = 0i64;

        for (action, quantity) in steps {
            match plan_movement(balance, quantity, action.label()) {
                Ok(plan) => {
                    prop_assert_eq!(plan.balance_before, balance);
                    prop_assert_eq!(plan.balance_after, balance + plan.signed_quantity);
                    ledger_sum += i64::from(plan.signed_quantity);
                    balance = plan.balance_after;
                }
                Err(LedgerError::InsufficientStock { available, requested }) => {
                    prop_assert_eq!(action.direction(), Direction::Outbound);
                    prop_assert_eq!(available, balance);
                    prop_assert_eq!(requested, quantity);
                    prop_assert!(balance < quantity);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
            prop_assert!(balance >= 0);
        }

        prop_assert_eq!(i64::from(balance), i64::from(opening) + ledger_sum);
    }

    /// Inbound movements always succeed and add exactly the quantity
    #[test]
    fn prop_inbound_adds_quantity(
        balance in 0i32..100_000,
        action in inbound_action_strategy(),
        quantity in quantity_strategy(),
    ) {
        let plan = plan_movement(balance, quantity, action.label()).unwrap();
        prop_assert_eq!(plan.balance_after, balance + quantity);
        prop_assert_eq!(plan.signed_quantity, quantity);
        prop_assert_eq!(plan.document_type.prefix(), "RE");
    }

    /// Outbound movements succeed exactly when the balance covers them
    #[test]
    fn prop_outbound_requires_cover(
        balance in 0i32..1_000,
        action in outbound_action_strategy(),
        quantity in quantity_strategy(),
    ) {
        let result = plan_movement(balance, quantity, action.label());
        if quantity <= balance {
            let plan = result.unwrap();
            prop_assert_eq!(plan.balance_after, balance - quantity);
            prop_assert_eq!(plan.signed_quantity, -quantity);
            prop_assert_eq!(plan.document_type.prefix(), "RS");
        } else {
            prop_assert!(
                matches!(result, Err(LedgerError::InsufficientStock { .. })),
                "expected insufficient stock"
            );
        }
    }

    /// A demonstration loan moves units to the new lot; the product total
    /// across both lots does not change.
    #[test]
    fn prop_demonstration_loan_preserves_total(
        balance in 1i32..1_000,
        fraction in 1i32..=100,
    ) {
        let quantity = (balance * fraction / 100).max(1);
        let plan = plan_movement(balance, quantity, MovementAction::DemonstrationLoan.label())
            .unwrap();

        prop_assert!(plan.opens_demonstration_lot);
        let demo_lot = quantity;
        prop_assert_eq!(plan.balance_after + demo_lot, balance);
    }

    /// Non-positive quantities are refused before anything else is checked
    #[test]
    fn prop_non_positive_quantity_rejected(
        balance in 0i32..1_000,
        quantity in -1_000i32..=0,
        action in operator_action_strategy(),
    ) {
        prop_assert_eq!(
            plan_movement(balance, quantity, action.label()),
            Err(LedgerError::InvalidQuantity(quantity))
        );
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_receipt_label_cannot_be_submitted() {
        let result = plan_movement(10, 1, MovementAction::PurchaseReceipt.label());
        assert!(matches!(result, Err(LedgerError::UnknownAction(_))));
    }

    #[test]
    fn test_withdraw_exact_balance() {
        let plan = plan_movement(5, 5, "Ajuste de Saída de Inventário").unwrap();
        assert_eq!(plan.balance_after, 0);
    }

    #[test]
    fn test_customer_return_is_inbound() {
        let plan = plan_movement(0, 2, "Devolução VIAPRO").unwrap();
        assert_eq!(plan.balance_after, 2);
        assert_eq!(plan.direction, Direction::Inbound);
    }

    #[test]
    fn test_labels_are_matched_exactly() {
        assert!(plan_movement(10, 1, "entrada de mercadoria").is_err());
        assert!(plan_movement(10, 1, " Entrada de mercadoria").is_err());
    }
}
