use std::io::Read;

use anyhow::Result;

use crate::domain::{Consumer, Expense, Payer, parse_amount};
use crate::io::export::SessionSnapshot;

/// Result of an import operation. Bad rows never abort the import: they are
/// skipped and reported, because the data often comes from a hand-edited
/// spreadsheet where a half-broken row is normal.
#[derive(Debug, Clone)]
pub struct ImportResult {
    pub expenses: Vec<Expense>,
    pub skipped: usize,
    pub errors: Vec<ImportError>,
}

impl ImportResult {
    pub fn imported(&self) -> usize {
        self.expenses.len()
    }
}

/// Error that occurred during import
#[derive(Debug, Clone)]
pub struct ImportError {
    pub line: usize,
    pub field: Option<String>,
    pub error: String,
}

/// Importer for loading expense data from external files
pub struct Importer;

impl Importer {
    /// Import expenses from CSV with columns `Category,Amount,Payer,Consumer`
    /// (header row expected). Category is free text and never validated
    /// against the canonical list.
    pub fn import_expenses_csv<R: Read>(reader: R) -> Result<ImportResult> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut expenses = Vec::new();
        let mut skipped = 0;
        let mut errors = Vec::new();

        for (line_num, result) in csv_reader.records().enumerate() {
            let line = line_num + 2; // +2 for header and 0-indexing

            let record = match result {
                Ok(r) => r,
                Err(e) => {
                    errors.push(ImportError {
                        line,
                        field: None,
                        error: format!("CSV parse error: {}", e),
                    });
                    skipped += 1;
                    continue;
                }
            };

            let category = record.get(0).unwrap_or("").trim();
            let amount_str = record.get(1).unwrap_or("");
            let payer_str = record.get(2).unwrap_or("");
            let consumer_str = record.get(3).unwrap_or("");

            if category.is_empty() {
                errors.push(ImportError {
                    line,
                    field: Some("category".to_string()),
                    error: "missing category".to_string(),
                });
                skipped += 1;
                continue;
            }

            let amount = match parse_amount(amount_str) {
                Ok(a) => a,
                Err(e) => {
                    errors.push(ImportError {
                        line,
                        field: Some("amount".to_string()),
                        error: format!("{}: {:?}", e, amount_str),
                    });
                    skipped += 1;
                    continue;
                }
            };

            let Some(payer) = Payer::from_str(payer_str) else {
                errors.push(ImportError {
                    line,
                    field: Some("payer".to_string()),
                    error: format!("expected H or M, got {:?}", payer_str),
                });
                skipped += 1;
                continue;
            };

            let Some(consumer) = Consumer::from_str(consumer_str) else {
                errors.push(ImportError {
                    line,
                    field: Some("consumer".to_string()),
                    error: format!("expected Split, H only or M only, got {:?}", consumer_str),
                });
                skipped += 1;
                continue;
            };

            expenses.push(Expense::new(category, amount, payer, consumer));
        }

        Ok(ImportResult {
            expenses,
            skipped,
            errors,
        })
    }

    /// Import a full session from a JSON snapshot
    pub fn import_session_json<R: Read>(reader: R) -> Result<SessionSnapshot> {
        let snapshot = serde_json::from_reader(reader)?;
        Ok(snapshot)
    }
}
