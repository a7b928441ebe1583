use std::{io, path::PathBuf};

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "export",
        "Write all expenses as CSV (`-` prints to the terminal)",
        "export [path|-]",
        cmd_export,
    )]
}

fn cmd_export(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        ["-"] => {
            let stdout = io::stdout();
            context.session.export_to(stdout.lock())?;
            Ok(())
        }
        [] | [_] => {
            let path = args
                .first()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(&context.config.export_file));
            let rows = context.session.export_to_file(&path)?;
            output::success(format!(
                "Exported {rows} expense(s) to {}",
                path.display()
            ));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: export [path|-]".into(),
        )),
    }
}
