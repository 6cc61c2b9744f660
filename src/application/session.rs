use std::io::Read;

use anyhow::Result;

use crate::application::AppError;
use crate::domain::{
    Consumer, Expense, Payer, Settlement, canonical_categories, compute_settlement, parse_amount,
};
use crate::io::{Exporter, ImportResult, Importer, SessionSnapshot};

/// In-memory expense book for one interactive session. Holds the ordered
/// expense list and the category ordering for exports; state lives only as
/// long as the process, save/load goes through explicit snapshots.
pub struct Session {
    expenses: Vec<Expense>,
    categories: Vec<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::with_categories(canonical_categories())
    }

    pub fn with_categories(categories: Vec<String>) -> Self {
        Self {
            expenses: Vec::new(),
            categories,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub fn add(&mut self, expense: Expense) {
        self.expenses.push(expense);
    }

    /// Coerce free-form field values into an expense and record it. This is
    /// the validation edge: past this point nothing checks the data again.
    pub fn add_fields(
        &mut self,
        category: &str,
        amount: &str,
        payer: &str,
        consumer: &str,
    ) -> Result<&Expense, AppError> {
        let amount =
            parse_amount(amount).map_err(|_| AppError::InvalidAmount(amount.to_string()))?;
        let payer = Payer::from_str(payer).ok_or_else(|| AppError::InvalidPayer(payer.to_string()))?;
        let consumer = Consumer::from_str(consumer)
            .ok_or_else(|| AppError::InvalidConsumer(consumer.to_string()))?;

        self.expenses
            .push(Expense::new(category.trim(), amount, payer, consumer));
        Ok(&self.expenses[self.expenses.len() - 1])
    }

    /// Remove the expense at a zero-based position
    pub fn remove(&mut self, index: usize) -> Result<Expense, AppError> {
        if index >= self.expenses.len() {
            return Err(AppError::ExpenseNotFound(index));
        }
        Ok(self.expenses.remove(index))
    }

    /// Current settlement position, recomputed from the full list
    pub fn settlement(&self) -> Settlement {
        compute_settlement(&self.expenses)
    }

    /// Exporter over the current snapshot of the session
    pub fn exporter(&self) -> Exporter<'_> {
        Exporter::new(&self.expenses, &self.categories)
    }

    /// Append expenses from a CSV file, keeping whatever is already loaded
    pub fn load_csv<R: Read>(&mut self, reader: R) -> Result<ImportResult> {
        let result = Importer::import_expenses_csv(reader)?;
        self.expenses.extend(result.expenses.iter().cloned());
        Ok(result)
    }

    /// Append expenses from a JSON session snapshot
    pub fn load_snapshot<R: Read>(&mut self, reader: R) -> Result<SessionSnapshot> {
        let snapshot = Importer::import_session_json(reader)?;
        self.expenses.extend(snapshot.expenses.iter().cloned());
        Ok(snapshot)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_fields_coerces_input() {
        let mut session = Session::new();
        let expense = session.add_fields("Coffee", "$4.50", "h", "split").unwrap();
        assert_eq!(expense.category, "Coffee");
        assert_eq!(expense.amount, 4.5);
        assert_eq!(expense.payer, Payer::H);
        assert_eq!(expense.consumer, Consumer::Split);
    }

    #[test]
    fn test_add_fields_rejects_garbage() {
        let mut session = Session::new();
        assert!(matches!(
            session.add_fields("Coffee", "lots", "H", "Split"),
            Err(AppError::InvalidAmount(_))
        ));
        assert!(matches!(
            session.add_fields("Coffee", "4.50", "Q", "Split"),
            Err(AppError::InvalidPayer(_))
        ));
        assert!(matches!(
            session.add_fields("Coffee", "4.50", "H", "everyone"),
            Err(AppError::InvalidConsumer(_))
        ));
        assert!(session.is_empty());
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut session = Session::new();
        session.add(Expense::new("Rent", 1200.0, Payer::H, Consumer::Split));
        assert!(matches!(
            session.remove(1),
            Err(AppError::ExpenseNotFound(1))
        ));
        let removed = session.remove(0).unwrap();
        assert_eq!(removed.category, "Rent");
        assert!(session.is_empty());
    }
}
