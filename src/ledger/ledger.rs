use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::{
    budget::DEFAULT_MONTHLY_BUDGET,
    category::CategorySet,
    record::{within_limits, ExpenseRecord},
};
use crate::errors::{LedgerError, Result};

/// Session-scoped expense ledger.
///
/// Records are append-only and categories only grow. Every mutation
/// validates its input before touching state, so a rejected call leaves the
/// ledger exactly as it was.
#[derive(Debug, Clone)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    categories: CategorySet,
    monthly_budget: Decimal,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            categories: CategorySet::default(),
            monthly_budget: DEFAULT_MONTHLY_BUDGET,
        }
    }

    /// Adds a category, ignoring names that are already present.
    pub fn add_category(&mut self, name: &str) -> Result<bool> {
        self.categories.insert(name)
    }

    /// Appends an expense. The category is not checked against the set.
    pub fn add_record(
        &mut self,
        date: NaiveDate,
        category: impl Into<String>,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<&ExpenseRecord> {
        let record = ExpenseRecord::new(date, category, amount, description)?;
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn set_budget(&mut self, value: Decimal) -> Result<()> {
        if !within_limits(value) {
            return Err(LedgerError::InvalidBudget(value));
        }
        self.monthly_budget = value;
        Ok(())
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn categories(&self) -> &CategorySet {
        &self.categories
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.categories.contains(name)
    }

    pub fn monthly_budget(&self) -> Decimal {
        self.monthly_budget
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn new_ledger_uses_defaults() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.monthly_budget(), dec!(1000));
        assert_eq!(ledger.categories().len(), 4);
    }

    #[test]
    fn records_keep_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add_record(date(5), "Food", dec!(3), "late").unwrap();
        ledger.add_record(date(1), "Books", dec!(20), "early").unwrap();
        let descriptions: Vec<&str> = ledger.records().iter().map(|r| r.description()).collect();
        assert_eq!(descriptions, ["late", "early"]);
    }

    #[test]
    fn unknown_category_is_accepted() {
        let mut ledger = Ledger::new();
        let record = ledger.add_record(date(1), "Travel", dec!(99), "").unwrap();
        assert_eq!(record.category(), "Travel");
        assert!(!ledger.contains_category("Travel"));
    }

    #[test]
    fn negative_amount_leaves_ledger_untouched() {
        let mut ledger = Ledger::new();
        ledger.add_record(date(1), "Food", dec!(1), "").unwrap();
        let err = ledger.add_record(date(2), "Food", dec!(-5), "").unwrap_err();
        assert!(matches!(err, LedgerError::InvalidAmount(_)));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn set_budget_validates_sign() {
        let mut ledger = Ledger::new();
        ledger.set_budget(dec!(250.50)).unwrap();
        assert_eq!(ledger.monthly_budget(), dec!(250.50));

        let err = ledger.set_budget(dec!(-1)).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBudget(_)));
        assert_eq!(ledger.monthly_budget(), dec!(250.50));

        ledger.set_budget(Decimal::ZERO).unwrap();
        assert_eq!(ledger.monthly_budget(), Decimal::ZERO);

        let err = ledger.set_budget(Decimal::MAX).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidBudget(_)));
        assert_eq!(ledger.monthly_budget(), Decimal::ZERO);
    }

    #[test]
    fn empty_category_rejected_without_change() {
        let mut ledger = Ledger::new();
        let before = ledger.categories().clone();
        assert!(matches!(
            ledger.add_category(""),
            Err(LedgerError::EmptyCategoryName)
        ));
        assert_eq!(ledger.categories(), &before);
    }
}
