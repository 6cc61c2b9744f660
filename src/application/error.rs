use thiserror::Error;

/// Errors surfaced at the application boundary. The settlement and export
/// core itself is infallible; everything here comes from coercing free-form
/// caller input or from the process edges.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("No expense at position {0}")]
    ExpenseNotFound(usize),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid payer: {0} (expected H or M)")]
    InvalidPayer(String),

    #[error("Invalid consumer: {0} (expected Split, H only or M only)")]
    InvalidConsumer(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
