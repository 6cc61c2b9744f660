use serde::{Deserialize, Serialize};

use super::{Amount, Consumer, Expense, Payer, format_usd};

/// Balances within this absolute distance of zero count as settled. Two
/// decimal currency display plus repeated halving means accumulated float
/// error below a cent must not surface as a spurious debt.
pub const SETTLED_TOLERANCE: Amount = 0.01;

/// Net position of the two parties over a set of expenses. Recomputed from
/// scratch on every call; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Settlement {
    /// Everything H paid out, regardless of who consumed it
    pub total_paid_h: Amount,
    /// Everything M paid out
    pub total_paid_m: Amount,
    /// H's share of consumption (full amount when H only, half when split)
    pub cost_h: Amount,
    /// M's share of consumption
    pub cost_m: Amount,
    /// total_paid_h - cost_h. Positive: M owes H. Negative: H owes M.
    pub balance: Amount,
}

/// Reduce a list of expenses to the settlement position. Single linear
/// pass; order of the input never affects the result.
pub fn compute_settlement(expenses: &[Expense]) -> Settlement {
    let mut total_paid_h = 0.0;
    let mut total_paid_m = 0.0;
    let mut cost_h = 0.0;
    let mut cost_m = 0.0;

    for expense in expenses {
        let amount = expense.amount;

        // Cash flow: who handed over the money
        match expense.payer {
            Payer::H => total_paid_h += amount,
            Payer::M => total_paid_m += amount,
        }

        // Consumption: who got the benefit
        match expense.consumer {
            Consumer::Split => {
                cost_h += amount / 2.0;
                cost_m += amount / 2.0;
            }
            Consumer::HOnly => cost_h += amount,
            Consumer::MOnly => cost_m += amount,
        }
    }

    Settlement {
        total_paid_h,
        total_paid_m,
        cost_h,
        cost_m,
        balance: total_paid_h - cost_h,
    }
}

/// Direction of the debt after netting payments against consumption.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SettlementStatus {
    MOwesH(Amount),
    HOwesM(Amount),
    AllSquare,
}

impl Settlement {
    pub fn status(&self) -> SettlementStatus {
        if self.balance.abs() < SETTLED_TOLERANCE {
            SettlementStatus::AllSquare
        } else if self.balance > 0.0 {
            SettlementStatus::MOwesH(self.balance)
        } else {
            SettlementStatus::HOwesM(-self.balance)
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.status(), SettlementStatus::AllSquare)
    }
}

impl std::fmt::Display for SettlementStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettlementStatus::MOwesH(amount) => write!(f, "M owes H: {}", format_usd(*amount)),
            SettlementStatus::HOwesM(amount) => write!(f, "H owes M: {}", format_usd(*amount)),
            SettlementStatus::AllSquare => write!(f, "All Square"),
        }
    }
}
