//! Parsing and display helpers shared by shell commands.

use chrono::{Local, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::cli::core::CommandError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Renders an amount with two decimals after the currency label, e.g. `RM 12.50`.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{currency} {rounded:.2}")
}

pub fn format_percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Accepts `YYYY-MM-DD` or the keyword `today`.
pub fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    if raw.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a date (expected YYYY-MM-DD)"))
    })
}

/// Parses a decimal amount. The sign is left for the ledger to validate.
pub fn parse_amount(raw: &str) -> Result<Decimal, CommandError> {
    let cleaned = raw.trim().trim_start_matches('+');
    cleaned
        .parse::<Decimal>()
        .map_err(|_| CommandError::InvalidArguments(format!("`{raw}` is not a valid amount")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_always_has_two_decimals() {
        assert_eq!(format_money(dec!(100), "RM"), "RM 100.00");
        assert_eq!(format_money(dec!(33.333333), "RM"), "RM 33.33");
        assert_eq!(format_money(dec!(0.005), "USD"), "USD 0.01");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(dec!(66.6666)), "66.7%");
        assert_eq!(format_percent(dec!(20)), "20.0%");
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2024-02-29").unwrap(),
            NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
        );
        assert!(parse_date("29/02/2024").is_err());
        assert!(parse_date("TODAY").is_ok());
    }

    #[test]
    fn amount_keeps_sign_for_ledger_validation() {
        assert_eq!(parse_amount("12.50").unwrap(), dec!(12.50));
        assert_eq!(parse_amount("+3").unwrap(), dec!(3));
        assert_eq!(parse_amount("-4").unwrap(), dec!(-4));
        assert!(parse_amount("ten").is_err());
    }
}
