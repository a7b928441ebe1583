use std::sync::Mutex;

use chrono::NaiveDate;
use expense_tracker::{config::ConfigManager, core::Session};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
#[allow(dead_code)]
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a config manager rooted in a fresh temporary directory.
#[allow(dead_code)]
pub fn isolated_config_manager() -> ConfigManager {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    ConfigManager::with_base_dir(base).expect("create config manager for temp dir")
}

#[allow(dead_code)]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Session holding the three-record ledger used across scenario tests.
#[allow(dead_code)]
pub fn sample_session() -> Session {
    let mut session = Session::new();
    let rows = [
        (date(2024, 1, 1), "Food", Decimal::from(50)),
        (date(2024, 1, 2), "Food", Decimal::from(30)),
        (date(2024, 1, 3), "Transport", Decimal::from(20)),
    ];
    for (day, category, amount) in rows {
        session
            .add_expense(day, category, amount, "")
            .expect("valid expense");
    }
    session
}
