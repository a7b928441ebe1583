//! Expense ledger data model: records, categories, budget thresholds.

pub mod budget;
pub mod category;
#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;

pub use budget::{BudgetStatus, DEFAULT_MONTHLY_BUDGET, NEAR_BUDGET_RATIO};
pub use category::{CategorySet, DEFAULT_CATEGORIES};
pub use ledger::Ledger;
pub use record::{ExpenseRecord, MAX_AMOUNT};
