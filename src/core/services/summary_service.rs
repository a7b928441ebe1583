//! Metrics derived from ledger records. Nothing here is cached; every call
//! recomputes from the slice it is given.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::errors::{LedgerError, Result};
use crate::ledger::{BudgetStatus, ExpenseRecord, Ledger};

/// Everything the dashboard renders for a non-empty ledger.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub record_count: usize,
    pub total: Decimal,
    pub span_days: i64,
    pub daily_average: Decimal,
    pub monthly_budget: Decimal,
    pub status: BudgetStatus,
    pub by_category: BTreeMap<String, Decimal>,
    pub daily_totals: BTreeMap<NaiveDate, Decimal>,
    pub category_shares: BTreeMap<String, Decimal>,
    pub top_category: String,
}

/// Stateless metrics over [`ExpenseRecord`] slices.
pub struct SummaryService;

impl SummaryService {
    pub fn total(records: &[ExpenseRecord]) -> Decimal {
        records.iter().map(ExpenseRecord::amount).sum()
    }

    /// Inclusive number of days between the earliest and latest record.
    pub fn span_days(records: &[ExpenseRecord]) -> Result<i64> {
        let mut dates = records.iter().map(ExpenseRecord::date);
        let first = dates
            .next()
            .ok_or(LedgerError::EmptyLedgerMetric("span_days"))?;
        let (min, max) = dates.fold((first, first), |(min, max), date| {
            (min.min(date), max.max(date))
        });
        Ok((max - min).num_days() + 1)
    }

    /// Total divided by the span; falls back to the raw total when no span exists.
    pub fn daily_average(records: &[ExpenseRecord]) -> Decimal {
        let total = Self::total(records);
        match Self::span_days(records) {
            Ok(days) if days > 0 => total / Decimal::from(days),
            _ => total,
        }
    }

    pub fn by_category(records: &[ExpenseRecord]) -> BTreeMap<String, Decimal> {
        let mut totals: BTreeMap<String, Decimal> = BTreeMap::new();
        for record in records {
            *totals.entry(record.category().to_string()).or_default() += record.amount();
        }
        totals
    }

    /// Highest-spending category. Equal totals resolve to the name that sorts first.
    pub fn top_category(records: &[ExpenseRecord]) -> Result<String> {
        let mut best: Option<(String, Decimal)> = None;
        for (name, amount) in Self::by_category(records) {
            let beats_best = best.as_ref().map_or(true, |(_, top)| amount > *top);
            if beats_best {
                best = Some((name, amount));
            }
        }
        best.map(|(name, _)| name)
            .ok_or(LedgerError::EmptyLedgerMetric("top_category"))
    }

    pub fn budget_status(total: Decimal, budget: Decimal) -> BudgetStatus {
        BudgetStatus::classify(total, budget)
    }

    /// Per-date totals, oldest first.
    pub fn daily_totals(records: &[ExpenseRecord]) -> BTreeMap<NaiveDate, Decimal> {
        let mut totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for record in records {
            *totals.entry(record.date()).or_default() += record.amount();
        }
        totals
    }

    /// Percentage of the overall total spent in each category.
    pub fn category_shares(records: &[ExpenseRecord]) -> BTreeMap<String, Decimal> {
        let total = Self::total(records);
        if total.is_zero() {
            return BTreeMap::new();
        }
        Self::by_category(records)
            .into_iter()
            .map(|(name, amount)| (name, amount * Decimal::ONE_HUNDRED / total))
            .collect()
    }

    /// Builds the full dashboard snapshot, or `None` when nothing is recorded.
    pub fn dashboard(ledger: &Ledger) -> Option<DashboardSummary> {
        let records = ledger.records();
        if records.is_empty() {
            return None;
        }
        let total = Self::total(records);
        let monthly_budget = ledger.monthly_budget();
        Some(DashboardSummary {
            record_count: records.len(),
            total,
            span_days: Self::span_days(records).ok()?,
            daily_average: Self::daily_average(records),
            monthly_budget,
            status: Self::budget_status(total, monthly_budget),
            by_category: Self::by_category(records),
            daily_totals: Self::daily_totals(records),
            category_shares: Self::category_shares(records),
            top_category: Self::top_category(records).ok()?,
        })
    }
}
