//! Line-oriented shell over a [`crate::core::Session`].

pub mod commands;
pub mod core;
pub mod formatters;
pub mod help;
pub mod output;
pub mod registry;
pub mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, SCRIPT_MODE_ENV};
