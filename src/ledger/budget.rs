use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

/// Monthly budget a new session starts with.
pub const DEFAULT_MONTHLY_BUDGET: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Fraction of the budget above which spending counts as near the limit (0.8).
pub const NEAR_BUDGET_RATIO: Decimal = Decimal::from_parts(8, 0, 0, false, 1);

/// Classification of total spending against the monthly budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum BudgetStatus {
    Ok,
    Near,
    Exceeded,
}

impl BudgetStatus {
    /// Exceeded is checked first; the comparisons are strict.
    pub fn classify(total: Decimal, budget: Decimal) -> Self {
        if total > budget {
            BudgetStatus::Exceeded
        } else if total > budget * NEAR_BUDGET_RATIO {
            BudgetStatus::Near
        } else {
            BudgetStatus::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BudgetStatus::Ok => "OK",
            BudgetStatus::Near => "NEAR",
            BudgetStatus::Exceeded => "EXCEEDED",
        }
    }
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
