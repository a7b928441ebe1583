use crate::cli::commands::report;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::formatters::parse_amount;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Show or change the monthly budget",
        "budget <show|set> [amount]",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::info(format!(
                "Monthly budget: {}",
                context.money(context.session.ledger().monthly_budget())
            ));
            Ok(())
        }
        ["set", amount] => {
            let value = parse_amount(amount)?;
            context.session.set_budget(value)?;
            output::success(format!("Monthly budget set to {}.", context.money(value)));
            report::print_budget_alert(context);
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: budget <show|set> [amount]".into(),
        )),
    }
}
