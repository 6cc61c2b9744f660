use serde::{Deserialize, Serialize};

/// Which of the two household members moved the money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Payer {
    H,
    M,
}

impl Payer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Payer::H => "H",
            Payer::M => "M",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "H" => Some(Payer::H),
            "M" => Some(Payer::M),
            _ => None,
        }
    }
}

impl std::fmt::Display for Payer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who economically benefited from the expense, independent of who paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Consumer {
    /// Both parties, half each
    Split,
    /// H alone
    HOnly,
    /// M alone
    MOnly,
}

impl Consumer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Consumer::Split => "Split",
            Consumer::HOnly => "H only",
            Consumer::MOnly => "M only",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "split" => Some(Consumer::Split),
            "h only" | "h-only" | "h" => Some(Consumer::HOnly),
            "m only" | "m-only" | "m" => Some(Consumer::MOnly),
            _ => None,
        }
    }
}

impl std::fmt::Display for Consumer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded expense. Expenses are plain values with no identity
/// beyond their position in the owning collection; corrections are made by
/// removing and re-adding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Usually one of the canonical categories, but free text is accepted
    /// (the category list is advisory, not a constraint)
    pub category: String,
    /// Amount in currency units. Positive by convention; the calculator
    /// tolerates anything the caller lets through.
    pub amount: f64,
    /// Who transferred the money
    pub payer: Payer,
    /// Who used what the money bought
    pub consumer: Consumer,
}

impl Expense {
    pub fn new(category: impl Into<String>, amount: f64, payer: Payer, consumer: Consumer) -> Self {
        Self {
            category: category.into(),
            amount,
            payer,
            consumer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payer_round_trip() {
        assert_eq!(Payer::from_str("H"), Some(Payer::H));
        assert_eq!(Payer::from_str("m"), Some(Payer::M));
        assert_eq!(Payer::from_str(" h "), Some(Payer::H));
        assert_eq!(Payer::from_str("X"), None);
        assert_eq!(Payer::M.as_str(), "M");
    }

    #[test]
    fn test_consumer_aliases() {
        assert_eq!(Consumer::from_str("Split"), Some(Consumer::Split));
        assert_eq!(Consumer::from_str("H only"), Some(Consumer::HOnly));
        assert_eq!(Consumer::from_str("h-only"), Some(Consumer::HOnly));
        assert_eq!(Consumer::from_str("m"), Some(Consumer::MOnly));
        assert_eq!(Consumer::from_str("both"), None);
        assert_eq!(Consumer::MOnly.as_str(), "M only");
    }
}
