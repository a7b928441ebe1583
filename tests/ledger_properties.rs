//! Property tests for ledger invariants and metric laws.

use chrono::{Duration, NaiveDate};
use expense_tracker::core::services::SummaryService;
use expense_tracker::ledger::{BudgetStatus, ExpenseRecord, Ledger};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date")
}

/// Non-negative amounts with cent precision, up to 10 000.00.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn arb_category() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("Transport".to_string()),
        Just("Books".to_string()),
        "[A-Z][a-z]{2,8}",
    ]
}

fn arb_record() -> impl Strategy<Value = ExpenseRecord> {
    (0i64..60, arb_category(), arb_amount(), "[a-z ]{0,12}").prop_map(
        |(offset, category, amount, description)| {
            ExpenseRecord::new(
                base_date() + Duration::days(offset),
                category,
                amount,
                description,
            )
            .expect("non-negative amount")
        },
    )
}

proptest! {
    #[test]
    fn total_ignores_insertion_order(mut records in prop::collection::vec(arb_record(), 0..40)) {
        let expected: Decimal = records.iter().map(ExpenseRecord::amount).sum();
        prop_assert_eq!(SummaryService::total(&records), expected);
        records.reverse();
        prop_assert_eq!(SummaryService::total(&records), expected);
    }

    #[test]
    fn add_category_is_idempotent(name in "[A-Za-z][A-Za-z ]{0,15}") {
        let mut ledger = Ledger::new();
        ledger.add_category(&name).unwrap();
        let once = ledger.categories().clone();
        prop_assert!(!ledger.add_category(&name).unwrap());
        prop_assert_eq!(ledger.categories(), &once);
    }

    #[test]
    fn single_day_average_equals_total(amounts in prop::collection::vec(arb_amount(), 1..20)) {
        let records: Vec<ExpenseRecord> = amounts
            .into_iter()
            .map(|amount| ExpenseRecord::new(base_date(), "Food", amount, "").unwrap())
            .collect();
        prop_assert_eq!(
            SummaryService::daily_average(&records),
            SummaryService::total(&records)
        );
    }

    #[test]
    fn budget_status_is_monotonic(
        budget_cents in 1i64..1_000_000,
        mut totals in prop::collection::vec(0i64..2_000_000, 2..30),
    ) {
        let budget = Decimal::new(budget_cents, 2);
        totals.sort_unstable();
        let statuses: Vec<BudgetStatus> = totals
            .iter()
            .map(|cents| SummaryService::budget_status(Decimal::new(*cents, 2), budget))
            .collect();
        for pair in statuses.windows(2) {
            prop_assert!(pair[0] <= pair[1], "status went backwards: {:?}", pair);
        }
    }

    #[test]
    fn category_totals_add_up(records in prop::collection::vec(arb_record(), 1..40)) {
        let by_category = SummaryService::by_category(&records);
        let summed: Decimal = by_category.values().copied().sum();
        prop_assert_eq!(summed, SummaryService::total(&records));
        let top = SummaryService::top_category(&records).unwrap();
        let top_amount = by_category[&top];
        prop_assert!(by_category.values().all(|amount| *amount <= top_amount));
    }
}
