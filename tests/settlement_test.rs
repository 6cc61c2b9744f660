mod common;

use common::{expense, typical_month};
use settled::domain::{
    Consumer, Payer, SettlementStatus, compute_settlement,
};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_typical_month_settlement() {
    let settlement = compute_settlement(&typical_month());

    assert_close(settlement.total_paid_h, 1204.5);
    assert_close(settlement.total_paid_m, 146.39);
    assert_close(settlement.cost_h, 643.2);
    assert_close(settlement.cost_m, 707.69);
    assert_close(settlement.balance, 561.3);
    assert_eq!(
        settlement.status().to_string(),
        "M owes H: $561.30"
    );
}

#[test]
fn test_balance_identity_holds_on_both_sides() {
    // balance = total_paid_h - cost_h = cost_m - total_paid_m
    let settlement = compute_settlement(&typical_month());
    assert_close(
        settlement.balance,
        settlement.cost_m - settlement.total_paid_m,
    );
}

#[test]
fn test_order_independence_over_permutations() {
    // Amounts chosen to be exactly representable so reordering the
    // accumulation cannot change the result in any bit
    let base = vec![
        expense("Rent", 100.0, Payer::H, Consumer::Split),
        expense("Coffee", 12.5, Payer::M, Consumer::HOnly),
        expense("Travel", 7.25, Payer::H, Consumer::MOnly),
        expense("Alcohol", 3.0, Payer::M, Consumer::Split),
    ];
    let reference = compute_settlement(&base);

    let mut reversed = base.clone();
    reversed.reverse();
    assert_eq!(compute_settlement(&reversed), reference);

    let mut rotated = base.clone();
    rotated.rotate_left(2);
    assert_eq!(compute_settlement(&rotated), reference);

    let mut swapped = base;
    swapped.swap(0, 3);
    assert_eq!(compute_settlement(&swapped), reference);
}

#[test]
fn test_single_split_expense() {
    // A split expense of A paid by H contributes A/2 to each cost and A to
    // H's payments
    let settlement = compute_settlement(&[expense("Wifi", 80.0, Payer::H, Consumer::Split)]);
    assert_eq!(settlement.total_paid_h, 80.0);
    assert_eq!(settlement.total_paid_m, 0.0);
    assert_eq!(settlement.cost_h, 40.0);
    assert_eq!(settlement.cost_m, 40.0);
    assert_eq!(settlement.balance, 40.0);
}

#[test]
fn test_paying_only_for_yourself_is_square() {
    let expenses = vec![
        expense("Coffee", 4.5, Payer::H, Consumer::HOnly),
        expense("Shopping", 25.0, Payer::M, Consumer::MOnly),
    ];
    let settlement = compute_settlement(&expenses);
    assert_eq!(settlement.balance, 0.0);
    assert!(settlement.is_settled());
}

#[test]
fn test_empty_input() {
    let settlement = compute_settlement(&[]);
    assert_eq!(
        (
            settlement.total_paid_h,
            settlement.total_paid_m,
            settlement.cost_h,
            settlement.cost_m,
            settlement.balance,
        ),
        (0.0, 0.0, 0.0, 0.0, 0.0)
    );
    assert_eq!(settlement.status(), SettlementStatus::AllSquare);
}

#[test]
fn test_sub_cent_balance_is_square() {
    // Half of 0.01 leaves each side a quarter-cent apart, inside tolerance
    let settlement = compute_settlement(&[expense("Misc", 0.01, Payer::H, Consumer::Split)]);
    assert_eq!(settlement.status(), SettlementStatus::AllSquare);
}
