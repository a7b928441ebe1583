//! Budget comparisons for the current session ledger.

use rust_decimal::Decimal;

use crate::ledger::{BudgetStatus, Ledger};

use super::SummaryService;

/// Stateless budgeting helpers that operate over [`Ledger`] snapshots.
pub struct BudgetService;

impl BudgetService {
    /// Status of the ledger's total spending against its monthly budget.
    pub fn status(ledger: &Ledger) -> BudgetStatus {
        let total = SummaryService::total(ledger.records());
        BudgetStatus::classify(total, ledger.monthly_budget())
    }

    /// Budget left to spend; negative once the budget is exceeded.
    pub fn remaining(ledger: &Ledger) -> Decimal {
        ledger.monthly_budget() - SummaryService::total(ledger.records())
    }

    /// Share of the budget already spent, as a percentage.
    ///
    /// `None` for a zero budget, or when the ratio does not fit a `Decimal`.
    pub fn utilization(ledger: &Ledger) -> Option<Decimal> {
        let budget = ledger.monthly_budget();
        if budget.is_zero() {
            return None;
        }
        let total = SummaryService::total(ledger.records());
        (total * Decimal::ONE_HUNDRED).checked_div(budget)
    }
}
