use rust_decimal::Decimal;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{format_date, format_percent};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{self, render_bars, Bar, DEFAULT_BAR_WIDTH};
use crate::core::services::{BudgetService, DashboardSummary};
use crate::ledger::BudgetStatus;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Show totals, daily average and budget status",
            "summary [--json]",
            cmd_summary,
        )
        .with_aliases(&["dashboard"]),
        CommandEntry::new(
            "chart",
            "Draw spending by category, over time, or as shares",
            "chart <category|timeline|breakdown>",
            cmd_chart,
        ),
    ]
}

pub(crate) fn print_empty_state() {
    output::info("No expenses recorded yet. Add your first expense with `add`.");
}

/// Prints the budget alert for the current totals, if any applies.
pub(crate) fn print_budget_alert(context: &ShellContext) {
    match BudgetService::status(context.session.ledger()) {
        BudgetStatus::Exceeded => output::warning("You have exceeded your monthly budget!"),
        BudgetStatus::Near => {
            output::info("You are close to your budget limit. Spend wisely!")
        }
        BudgetStatus::Ok => {}
    }
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {}
        ["--json"] => {
            let summary = context.session.dashboard();
            output::line(serde_json::to_string_pretty(&summary)?);
            return Ok(());
        }
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: summary [--json]".into(),
            ))
        }
    }

    let Some(summary) = context.session.dashboard() else {
        output::line(format!("  Total expenses : {}", context.money(Decimal::ZERO)));
        print_empty_state();
        return Ok(());
    };

    output::section("Dashboard");
    output::line(format!("  Records        : {}", summary.record_count));
    output::line(format!("  Total expenses : {}", context.money(summary.total)));
    output::line(format!(
        "  Daily average  : {} over {} day(s)",
        context.money(summary.daily_average),
        summary.span_days
    ));
    output::line(format!(
        "  Monthly budget : {}",
        context.money(summary.monthly_budget)
    ));
    let ledger = context.session.ledger();
    let remaining = BudgetService::remaining(ledger);
    let usage = BudgetService::utilization(ledger)
        .map(format_percent)
        .unwrap_or_else(|| "n/a".into());
    output::line(format!(
        "  Budget status  : {} ({} used, {} left)",
        summary.status,
        usage,
        context.money(remaining)
    ));

    print_budget_alert(context);
    output::success(format!(
        "You spend the most on {}. Keep an eye on it!",
        summary.top_category
    ));
    Ok(())
}

fn cmd_chart(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let kind = args.first().map(|value| value.to_lowercase());
    let Some(summary) = context.session.dashboard() else {
        print_empty_state();
        return Ok(());
    };
    match kind.as_deref().unwrap_or("category") {
        "category" => chart_by_category(context, &summary),
        "timeline" | "time" => chart_timeline(context, &summary),
        "breakdown" | "pie" => chart_breakdown(&summary),
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown chart `{other}` (expected category, timeline or breakdown)"
            )))
        }
    }
    Ok(())
}

fn chart_by_category(context: &ShellContext, summary: &DashboardSummary) {
    output::section("Expenses by category");
    let bars: Vec<Bar> = summary
        .by_category
        .iter()
        .map(|(name, amount)| Bar {
            label: name.clone(),
            value: *amount,
            caption: context.money(*amount),
        })
        .collect();
    ui::print_lines(&render_bars(&bars, DEFAULT_BAR_WIDTH));
}

fn chart_timeline(context: &ShellContext, summary: &DashboardSummary) {
    output::section("Expenses over time");
    let bars: Vec<Bar> = summary
        .daily_totals
        .iter()
        .map(|(date, amount)| Bar {
            label: format_date(*date),
            value: *amount,
            caption: context.money(*amount),
        })
        .collect();
    ui::print_lines(&render_bars(&bars, DEFAULT_BAR_WIDTH));
}

fn chart_breakdown(summary: &DashboardSummary) {
    output::section("Category breakdown");
    if summary.category_shares.is_empty() {
        output::info("All recorded amounts are zero; nothing to break down.");
        return;
    }
    let bars: Vec<Bar> = summary
        .category_shares
        .iter()
        .map(|(name, share)| Bar {
            label: name.clone(),
            value: *share,
            caption: format_percent(*share),
        })
        .collect();
    ui::print_lines(&render_bars(&bars, DEFAULT_BAR_WIDTH));
}
