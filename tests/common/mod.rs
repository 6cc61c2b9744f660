// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use settled::domain::{Amount, Consumer, Expense, Payer, canonical_categories};

pub fn expense(category: &str, amount: Amount, payer: Payer, consumer: Consumer) -> Expense {
    Expense::new(category, amount, payer, consumer)
}

pub fn categories() -> Vec<String> {
    canonical_categories()
}

/// Test fixture: a typical month of shared expenses
///
/// H pays rent (split), M pays groceries (split), H buys M's coffee,
/// M pays for M's own shopping.
pub fn typical_month() -> Vec<Expense> {
    vec![
        expense("Rent", 1200.0, Payer::H, Consumer::Split),
        expense("Groceries", 86.4, Payer::M, Consumer::Split),
        expense("Coffee", 4.5, Payer::H, Consumer::MOnly),
        expense("Shopping", 59.99, Payer::M, Consumer::MOnly),
    ]
}
