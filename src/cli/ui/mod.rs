pub mod chart;
pub mod table;

pub use chart::{render_bars, Bar, DEFAULT_BAR_WIDTH};
pub use table::{Table, TableColumn};

use crate::cli::output;

/// Prints each rendered line as-is.
pub fn print_lines(lines: &[String]) {
    for line in lines {
        output::line(line);
    }
}
