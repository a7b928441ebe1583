/// Column alignment inside a [`Table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub align: Align,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Right,
        }
    }
}

/// Read-only tabular view; column widths adapt to the widest cell.
#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(index))
                    .map(|cell| display_width(cell))
                    .chain(std::iter::once(display_width(&column.header)))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    /// Renders header, separator and rows as text lines.
    pub fn render_lines(&self) -> Vec<String> {
        let widths = self.widths();
        let format_row = |cells: Vec<&str>| -> String {
            cells
                .iter()
                .zip(&self.columns)
                .zip(&widths)
                .map(|((cell, column), width)| pad(cell, *width, column.align))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        lines.push(format_row(
            self.columns.iter().map(|col| col.header.as_str()).collect(),
        ));
        let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push("-".repeat(total_width));
        for row in &self.rows {
            lines.push(format_row(row.iter().map(String::as_str).collect()));
        }
        lines
    }
}

fn display_width(text: &str) -> usize {
    text.chars().count()
}

fn pad(cell: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(display_width(cell)));
    match align {
        Align::Left => format!("{cell}{fill}"),
        Align::Right => format!("{fill}{cell}"),
    }
}
