use rust_decimal::Decimal;
use thiserror::Error;

/// Failures raised by ledger mutations, metrics, export and configuration I/O.
///
/// Validation variants reject an operation before any state changes; the
/// session stays usable after every one of them.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Invalid amount {0}: expense amounts cannot be negative or exceed {max}", max = crate::ledger::MAX_AMOUNT)]
    InvalidAmount(Decimal),
    #[error("Invalid budget {0}: the monthly budget cannot be negative or exceed {max}", max = crate::ledger::MAX_AMOUNT)]
    InvalidBudget(Decimal),
    #[error("Category name cannot be empty")]
    EmptyCategoryName,
    #[error("`{0}` needs at least one recorded expense")]
    EmptyLedgerMetric(&'static str),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
