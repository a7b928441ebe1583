//! Dispatch, error reporting, and shared helpers for shell commands.

use std::io;

use dialoguer::{theme::ColorfulTheme, Confirm};
use rust_decimal::Decimal;
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::ConfigManager,
    core::Session,
    errors::LedgerError,
};

use super::commands;
use super::formatters::format_money;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failure of a single shell command; the shell reports it and keeps going.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failure that ends the shell.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] LedgerError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        Self::with_config_manager(mode, config_manager)
    }

    pub fn with_config_manager(
        mode: CliMode,
        config_manager: ConfigManager,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let config = config_manager.load()?;
        output::set_preferences(output::OutputPreferences {
            plain_mode: config.plain_output,
        });
        tracing::debug!(path = %config_manager.path().display(), "configuration loaded");

        Ok(ShellContext {
            mode,
            registry,
            session: Session::new(),
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        format!("expenses({})> ", self.session.ledger().len())
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn money(&self, amount: Decimal) -> String {
        format_money(amount, &self.config.currency)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        output::set_preferences(output::OutputPreferences {
            plain_mode: self.config.plain_output,
        });
        self.config_manager.save(&self.config)?;
        Ok(())
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    /// Tokenizes and runs one command line.
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err);
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };
        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

        match self.dispatch(&command, raw, &args) {
            Ok(LoopControl::Exit) => {
                self.running = false;
                Ok(LoopControl::Exit)
            }
            other => other,
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));

        let needle = input.to_lowercase();
        let best = self
            .registry
            .names()
            .into_iter()
            .map(|name| (levenshtein(name, &needle), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::hint(format!("Did you mean `{name}`?"));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        let confirmed = Confirm::with_theme(&self.theme)
            .with_prompt("Exit and discard this session's expenses?")
            .default(false)
            .interact()?;
        Ok(confirmed)
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match &err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                output::error(message);
                output::hint("Use `help <command>` for usage details.");
            }
            CommandError::Core(LedgerError::EmptyLedgerMetric(_)) => {
                output::error(&err);
                output::hint("Record an expense with `add` first.");
            }
            _ => output::error(&err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn script_context() -> (ShellContext, TempDir) {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let context = ShellContext::with_config_manager(CliMode::Script, manager).unwrap();
        (context, dir)
    }

    #[test]
    fn add_command_appends_to_session() {
        let (mut context, _dir) = script_context();
        context
            .process_line("add 2024-01-01 Food 50 weekly groceries")
            .unwrap();
        let records = context.session.ledger().records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount(), dec!(50));
        assert_eq!(records[0].description(), "weekly groceries");
    }

    #[test]
    fn rejected_amount_surfaces_core_error() {
        let (mut context, _dir) = script_context();
        let err = context.process_line("add 2024-01-01 Food -5").unwrap_err();
        assert!(matches!(err, CommandError::Core(LedgerError::InvalidAmount(_))));
        assert!(context.session.ledger().is_empty());
    }

    #[test]
    fn exit_stops_the_loop() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn unknown_command_keeps_running() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.process_line("sumary").unwrap(), LoopControl::Continue);
        assert!(context.running);
    }

    #[test]
    fn quit_alias_resolves_to_exit() {
        let (mut context, _dir) = script_context();
        assert_eq!(context.process_line("quit").unwrap(), LoopControl::Exit);
    }

    #[test]
    fn category_and_budget_commands_mutate_session() {
        let (mut context, _dir) = script_context();
        context.process_line("category add Rent").unwrap();
        context.process_line("budget set 750.50").unwrap();
        let ledger = context.session.ledger();
        assert!(ledger.contains_category("Rent"));
        assert_eq!(ledger.monthly_budget(), dec!(750.50));
    }

    #[test]
    fn config_set_persists_to_disk() {
        let (mut context, dir) = script_context();
        context.process_line("config set currency EUR").unwrap();
        let reloaded = ConfigManager::with_base_dir(dir.path().to_path_buf())
            .unwrap()
            .load()
            .unwrap();
        assert_eq!(reloaded.currency, "EUR");
    }
}
