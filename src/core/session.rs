//! Session-lifetime owner of the expense ledger.

use std::{io::Write, path::Path};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::core::services::{DashboardSummary, SummaryService};
use crate::errors::Result;
use crate::ledger::Ledger;
use crate::utils::export;

/// One user's working session.
///
/// Callers mutate through the session and then pull a fresh
/// [`DashboardSummary`]; nothing is recomputed behind their back.
#[derive(Debug, Clone, Default)]
pub struct Session {
    ledger: Ledger,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Returns `true` when the category was appended, `false` if it already existed.
    pub fn add_category(&mut self, name: &str) -> Result<bool> {
        let added = self.ledger.add_category(name)?;
        if added {
            tracing::info!(category = name.trim(), "category added");
        } else {
            tracing::debug!(category = name.trim(), "category already present");
        }
        Ok(added)
    }

    pub fn add_expense(
        &mut self,
        date: NaiveDate,
        category: &str,
        amount: Decimal,
        description: &str,
    ) -> Result<()> {
        if !self.ledger.contains_category(category) {
            tracing::warn!(category, "recording expense under an unlisted category");
        }
        self.ledger
            .add_record(date, category, amount, description)?;
        tracing::info!(%date, category, %amount, records = self.ledger.len(), "expense recorded");
        Ok(())
    }

    pub fn set_budget(&mut self, value: Decimal) -> Result<()> {
        let previous = self.ledger.monthly_budget();
        self.ledger.set_budget(value)?;
        tracing::info!(%previous, budget = %value, "monthly budget updated");
        Ok(())
    }

    pub fn dashboard(&self) -> Option<DashboardSummary> {
        SummaryService::dashboard(&self.ledger)
    }

    /// Streams the ledger as CSV into `writer`.
    pub fn export_to<W: Write>(&self, writer: W) -> Result<()> {
        export::write_records(self.ledger.records(), writer)
    }

    /// Writes the ledger as CSV to `path`, returning the number of rows written.
    pub fn export_to_file(&self, path: &Path) -> Result<usize> {
        export::save_records_to_file(self.ledger.records(), path)?;
        let rows = self.ledger.len();
        tracing::info!(path = %path.display(), rows, "ledger exported");
        Ok(rows)
    }
}
