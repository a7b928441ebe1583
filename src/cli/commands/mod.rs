pub mod budget;
pub mod category;
pub mod config;
pub mod expense;
pub mod export;
pub mod report;
pub mod system;

use crate::cli::registry::CommandRegistry;

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    let groups = [
        expense::definitions(),
        category::definitions(),
        budget::definitions(),
        report::definitions(),
        export::definitions(),
        config::definitions(),
        system::definitions(),
    ];
    for entry in groups.into_iter().flatten() {
        registry.register(entry);
    }
}
