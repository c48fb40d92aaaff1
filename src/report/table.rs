use std::fmt::Write;

/// Fixed-width console table with a leading `(index)` column.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Short rows are padded with empty cells, extra cells are dropped.
    pub fn push_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let index_header = "(index)";
        let index_width = self
            .rows
            .len()
            .saturating_sub(1)
            .to_string()
            .len()
            .max(index_header.len());

        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let mut out = String::new();
        let _ = write!(out, "{:<width$}", index_header, width = index_width);
        for (header, width) in self.headers.iter().zip(&widths) {
            let _ = write!(out, " | {:<width$}", header, width = *width);
        }
        out.push('\n');

        out.push_str(&"-".repeat(index_width));
        for width in &widths {
            out.push_str("-+-");
            out.push_str(&"-".repeat(*width));
        }
        out.push('\n');

        for (index, row) in self.rows.iter().enumerate() {
            let _ = write!(out, "{:<width$}", index, width = index_width);
            for (cell, width) in row.iter().zip(&widths) {
                let _ = write!(out, " | {:<width$}", cell, width = *width);
            }
            out.push('\n');
        }
        out
    }
}
