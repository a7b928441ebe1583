use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display and export preferences",
        "config <show|set> [key value]",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::section("Configuration");
            for key in CONFIG_KEYS {
                let value = context.config.get(key).unwrap_or_default();
                output::line(format!("  {key:<13}: {value}"));
            }
            output::line(format!("  (stored in {})", context.config_manager.path().display()));
            Ok(())
        }
        ["set", key, value @ ..] if !value.is_empty() => {
            context.config.set(key, &value.join(" "))?;
            context.persist_config()?;
            output::success(format!("Updated `{key}`."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config <show|set> [key value]".into(),
        )),
    }
}
