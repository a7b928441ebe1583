//! Horizontal text bar charts for the dashboard.

use rust_decimal::{prelude::ToPrimitive, Decimal};

pub const DEFAULT_BAR_WIDTH: usize = 30;
const BAR_CHAR: char = '#';

/// One labelled bar; `value` sets the length, `caption` is printed after it.
#[derive(Debug, Clone)]
pub struct Bar {
    pub label: String,
    pub value: Decimal,
    pub caption: String,
}

/// Scales bars so the largest value spans `width` cells.
pub fn render_bars(bars: &[Bar], width: usize) -> Vec<String> {
    let max = bars
        .iter()
        .map(|bar| bar.value)
        .max()
        .unwrap_or(Decimal::ZERO);
    let label_width = bars
        .iter()
        .map(|bar| bar.label.chars().count())
        .max()
        .unwrap_or(0);

    bars.iter()
        .map(|bar| {
            let cells = bar_length(bar.value, max, width);
            let fill = BAR_CHAR.to_string().repeat(cells);
            format!(
                "{:<label_width$} | {:<width$} {}",
                bar.label, fill, bar.caption
            )
            .trim_end()
            .to_string()
        })
        .collect()
}

fn bar_length(value: Decimal, max: Decimal, width: usize) -> usize {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return 0;
    }
    let scaled = (value * Decimal::from(width) / max).round();
    // Any positive value gets at least one cell.
    scaled.to_usize().unwrap_or(width).clamp(1, width)
}
