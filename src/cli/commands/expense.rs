use chrono::{Local, NaiveDate};
use dialoguer::{Input, Select};
use rust_decimal::Decimal;

use crate::cli::commands::report;
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::formatters::{format_date, parse_amount, parse_date};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{self, Table, TableColumn};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Record an expense",
            "add <YYYY-MM-DD|today> <category> <amount> [description...]",
            cmd_add,
        ),
        CommandEntry::new("list", "Show all recorded expenses", "list", cmd_list)
            .with_aliases(&["ls"]),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() && context.mode() == CliMode::Interactive {
        return run_add_wizard(context);
    }
    let [date, category, amount, description @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add <YYYY-MM-DD|today> <category> <amount> [description...]".into(),
        ));
    };
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;
    record_expense(context, date, category, amount, &description.join(" "))
}

fn run_add_wizard(context: &mut ShellContext) -> CommandResult {
    let today = format_date(Local::now().date_naive());
    let raw_date: String = Input::with_theme(&context.theme)
        .with_prompt("Date (YYYY-MM-DD)")
        .default(today)
        .interact_text()?;
    let date = parse_date(&raw_date)?;

    let categories: Vec<String> = context
        .session
        .ledger()
        .categories()
        .iter()
        .map(str::to_string)
        .collect();
    let index = Select::with_theme(&context.theme)
        .with_prompt("Category")
        .items(&categories)
        .default(0)
        .interact()?;

    let raw_amount: String = Input::with_theme(&context.theme)
        .with_prompt(format!("Amount ({})", context.config.currency))
        .interact_text()?;
    let amount = parse_amount(&raw_amount)?;

    let description: String = Input::with_theme(&context.theme)
        .with_prompt("Description")
        .allow_empty(true)
        .interact_text()?;

    record_expense(context, date, &categories[index], amount, &description)
}

fn record_expense(
    context: &mut ShellContext,
    date: NaiveDate,
    category: &str,
    amount: Decimal,
    description: &str,
) -> CommandResult {
    let listed = context.session.ledger().contains_category(category);
    context
        .session
        .add_expense(date, category, amount, description)?;
    output::success(format!(
        "Expense added: {} {} {}",
        format_date(date),
        category,
        context.money(amount)
    ));
    if !listed {
        output::warning(format!(
            "`{category}` is not in the category list. Use `category add {category}` to list it."
        ));
    }
    report::print_budget_alert(context);
    Ok(())
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.session.ledger().records();
    if records.is_empty() {
        report::print_empty_state();
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::right("#"),
        TableColumn::left("Date"),
        TableColumn::left("Category"),
        TableColumn::right("Amount"),
        TableColumn::left("Description"),
    ]);
    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            format_date(record.date()),
            record.category().to_string(),
            context.money(record.amount()),
            record.description().to_string(),
        ]);
    }
    output::section(format!("Expenses ({})", records.len()));
    ui::print_lines(&table.render_lines());
    Ok(())
}
