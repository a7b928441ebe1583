pub mod build_info;
pub mod export;

use std::{env, path::PathBuf, sync::Once};

use dirs::home_dir;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_DIR_NAME: &str = ".expense_tracker";

const DEFAULT_LOG_FILTER: &str = "warn,expense_tracker=info";

static TRACING_INIT: Once = Once::new();

/// Builds the log filter from `RUST_LOG`, or the crate default when it is unset
/// or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initializes the global tracing subscriber once per process.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();

        // stdout carries command output; logs go to stderr.
        let _ = fmt()
            .with_env_filter(log_filter(rust_log.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
        tracing::info!("Expense tracker tracing initialized.");
    });
}

/// Returns the application data directory, defaulting to `~/.expense_tracker`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("EXPENSE_TRACKER_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}
