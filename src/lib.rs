#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a session-scoped expense ledger, derives dashboard
//! metrics from it, and exports it as CSV. The interactive shell in
//! [`cli`] is a thin presentation layer over [`core::Session`].

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod utils;

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    utils::init_tracing();
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_is_idempotent() {
        super::init();
        super::init();
    }
}
