pub mod budget_service;
pub mod summary_service;

pub use budget_service::BudgetService;
pub use summary_service::{DashboardSummary, SummaryService};
