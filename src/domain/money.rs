use std::fmt;

/// Amounts are plain f64 currency units. Formula cells in the CSV export
/// embed each amount in its natural decimal form, and splitting an odd cent
/// in half must not truncate, so no fixed-point scaling is applied. Display
/// rounding to two decimals happens only at the formatting edge.
pub type Amount = f64;

/// Format an amount as a two-decimal currency string with a dollar prefix.
/// Example: 50.0 -> "$50.00", 12.345 -> "$12.35"
pub fn format_usd(amount: Amount) -> String {
    if amount < 0.0 {
        format!("-${:.2}", amount.abs())
    } else {
        format!("${:.2}", amount)
    }
}

/// Format an amount as a bare spreadsheet literal: no currency symbol, no
/// padding, shortest decimal form. Example: 20.0 -> "20", 12.5 -> "12.5"
pub fn format_literal(amount: Amount) -> String {
    format!("{}", amount)
}

/// Parse a decimal string into an amount.
/// Example: "50.00" -> 50.0, "12.5" -> 12.5, "100" -> 100.0
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim().trim_start_matches('$');
    if input.is_empty() {
        return Err(ParseAmountError::InvalidFormat);
    }
    input
        .parse::<f64>()
        .map_err(|_| ParseAmountError::InvalidFormat)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    InvalidFormat,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::InvalidFormat => write!(f, "invalid amount format"),
        }
    }
}

impl std::error::Error for ParseAmountError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(50.0), "$50.00");
        assert_eq!(format_usd(12.345), "$12.35");
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(-12.34), "-$12.34");
    }

    #[test]
    fn test_format_literal() {
        assert_eq!(format_literal(20.0), "20");
        assert_eq!(format_literal(12.5), "12.5");
        assert_eq!(format_literal(0.01), "0.01");
        assert_eq!(format_literal(-3.0), "-3");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("50.00"), Ok(50.0));
        assert_eq!(parse_amount("50"), Ok(50.0));
        assert_eq!(parse_amount("12.5"), Ok(12.5));
        assert_eq!(parse_amount(" $9.99 "), Ok(9.99));
        assert_eq!(parse_amount("-3"), Ok(-3.0));
    }

    #[test]
    fn test_parse_amount_invalid() {
        assert!(parse_amount("abc").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("12.34.56").is_err());
    }
}
