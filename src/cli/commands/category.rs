use dialoguer::Input;

use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{self, Table, TableColumn};
use crate::core::services::SummaryService;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "category",
        "List categories or add a custom one",
        "category <list|add> [name]",
        cmd_category,
    )]
}

fn cmd_category(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().map(|action| action.to_lowercase()).as_deref() {
        None | Some("list") => handle_list(context),
        Some("add") => handle_add(context, &args[1..]),
        Some(other) => Err(CommandError::InvalidArguments(format!(
            "unknown category subcommand `{other}`"
        ))),
    }
}

fn handle_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let name = if args.is_empty() && context.mode() == CliMode::Interactive {
        Input::<String>::with_theme(&context.theme)
            .with_prompt("New category name")
            .interact_text()?
    } else {
        args.join(" ")
    };

    if context.session.add_category(&name)? {
        output::success(format!("Added `{}` category!", name.trim()));
    } else {
        output::info(format!("Category `{}` already exists.", name.trim()));
    }
    Ok(())
}

fn handle_list(context: &mut ShellContext) -> CommandResult {
    let ledger = context.session.ledger();
    let totals = SummaryService::by_category(ledger.records());

    let mut table = Table::new(vec![TableColumn::left("Category"), TableColumn::right("Spent")]);
    for name in ledger.categories().iter() {
        let spent = totals.get(name).copied().unwrap_or_default();
        table.add_row(vec![name.to_string(), context.money(spent)]);
    }
    // Expenses may be filed under names that were never added to the list.
    for (name, spent) in totals.iter().filter(|(name, _)| !ledger.contains_category(name)) {
        table.add_row(vec![format!("{name} (unlisted)"), context.money(*spent)]);
    }

    output::section("Categories");
    ui::print_lines(&table.render_lines());
    Ok(())
}
