use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{LedgerError, Result};

/// Largest amount a record or budget may hold (one trillion).
///
/// Keeps every ledger total far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(0xD4A5_1000, 0xE8, 0, false, 0);

pub(crate) fn within_limits(amount: Decimal) -> bool {
    amount >= Decimal::ZERO && amount <= MAX_AMOUNT
}

/// A single dated, categorized expense entry.
///
/// Records are immutable once created; the ledger only ever appends them.
/// Field names serialize in the export header casing (`Date`, `Category`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExpenseRecord {
    date: NaiveDate,
    category: String,
    amount: Decimal,
    description: String,
}

impl ExpenseRecord {
    pub fn new(
        date: NaiveDate,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Self> {
        if !within_limits(amount) {
            return Err(LedgerError::InvalidAmount(amount));
        }
        Ok(Self {
            date,
            category: category.into(),
            amount,
            description: description.into(),
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }
}
