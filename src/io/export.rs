use std::collections::HashMap;
use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{
    Amount, Consumer, Expense, compute_settlement, format_literal, format_usd,
};

/// Session snapshot for full export/import
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub expenses: Vec<Expense>,
}

/// Per-category expense amounts, bucketed by who consumed them. The raw
/// amounts are kept as lists because the CSV export emits them individually
/// inside spreadsheet formulas instead of pre-summing.
#[derive(Debug, Clone, Default)]
struct CategoryBuckets {
    h: Vec<Amount>,
    m: Vec<Amount>,
    split: Vec<Amount>,
}

impl CategoryBuckets {
    fn is_empty(&self) -> bool {
        self.h.is_empty() && self.m.is_empty() && self.split.is_empty()
    }

    fn total(&self) -> Amount {
        self.h.iter().sum::<Amount>()
            + self.m.iter().sum::<Amount>()
            + self.split.iter().sum::<Amount>()
    }
}

/// Exporter for converting the expense list to spreadsheet-ready formats
pub struct Exporter<'a> {
    expenses: &'a [Expense],
    categories: &'a [String],
}

impl<'a> Exporter<'a> {
    /// `categories` fixes the row order of the export; expenses with a
    /// category outside the list still get a row, after the known ones.
    pub fn new(expenses: &'a [Expense], categories: &'a [String]) -> Self {
        Self {
            expenses,
            categories,
        }
    }

    /// Export the ledger as CSV with per-category spreadsheet formulas.
    ///
    /// Cost cells are addition expressions over the raw per-expense amounts
    /// (`=((20+10) + (30)/2)`) so the receiving spreadsheet recomputes the
    /// totals itself and individual line items stay editable after export.
    /// The formula cells never contain commas or quotes and the summary
    /// block needs a truly blank separator line, so rows are written
    /// directly rather than through a quoting CSV encoder.
    pub fn export_ledger_csv<W: Write>(&self, mut writer: W) -> Result<usize> {
        let groups = self.group_by_category();

        writeln!(
            writer,
            "Category,H Cost (Formula),M Cost (Formula),Total Category Cost"
        )?;

        let mut count = 0;
        for (category, buckets) in &groups {
            if buckets.is_empty() {
                continue;
            }
            writeln!(
                writer,
                "{},{},{},{}",
                category,
                cost_formula(&buckets.h, &buckets.split),
                cost_formula(&buckets.m, &buckets.split),
                format_literal(buckets.total()),
            )?;
            count += 1;
        }

        let settlement = compute_settlement(self.expenses);
        writeln!(writer)?;
        writeln!(writer, "SUMMARY,,,")?;
        writeln!(
            writer,
            "Total Paid By H,{},Total Paid By M,{}",
            format_usd(settlement.total_paid_h),
            format_usd(settlement.total_paid_m),
        )?;
        writeln!(writer, "Who Owes Whom?,{},,", settlement.status())?;
        writer.flush()?;

        Ok(count)
    }

    /// Convenience wrapper returning the CSV document as a string
    pub fn ledger_csv_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.export_ledger_csv(&mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Export the full session as a JSON snapshot
    pub fn export_session_json<W: Write>(&self, mut writer: W) -> Result<SessionSnapshot> {
        let snapshot = SessionSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            expenses: self.expenses.to_vec(),
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(snapshot)
    }

    /// Bucket every expense under its category, seeding the map from the
    /// known-category list so row order is deterministic. Categories not in
    /// the list are appended in first-seen order.
    fn group_by_category(&self) -> Vec<(String, CategoryBuckets)> {
        let mut groups: Vec<(String, CategoryBuckets)> = self
            .categories
            .iter()
            .map(|c| (c.clone(), CategoryBuckets::default()))
            .collect();
        let mut index: HashMap<String, usize> = groups
            .iter()
            .enumerate()
            .map(|(i, (c, _))| (c.clone(), i))
            .collect();

        for expense in self.expenses {
            let i = match index.get(&expense.category) {
                Some(&i) => i,
                None => {
                    groups.push((expense.category.clone(), CategoryBuckets::default()));
                    let i = groups.len() - 1;
                    index.insert(expense.category.clone(), i);
                    i
                }
            };
            let buckets = &mut groups[i].1;
            match expense.consumer {
                Consumer::HOnly => buckets.h.push(expense.amount),
                Consumer::MOnly => buckets.m.push(expense.amount),
                Consumer::Split => buckets.split.push(expense.amount),
            }
        }

        groups
    }
}

/// Build one cost-cell formula: the side's own amounts summed in full plus
/// the shared amounts summed and halved. An empty bucket contributes a
/// literal 0 so the expression stays valid spreadsheet syntax.
fn cost_formula(own: &[Amount], split: &[Amount]) -> String {
    format!("=(({}) + ({})/2)", join_literals(own), join_literals(split))
}

fn join_literals(amounts: &[Amount]) -> String {
    if amounts.is_empty() {
        "0".to_string()
    } else {
        amounts
            .iter()
            .map(|a| format_literal(*a))
            .collect::<Vec<_>>()
            .join("+")
    }
}
