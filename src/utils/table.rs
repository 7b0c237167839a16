//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

impl Column {
    pub fn new(header: &str, width: usize) -> Self {
        Self {
            header: header.to_string(),
            width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Columns grow to fit the widest cell; trailing spaces are trimmed.
    pub fn render(&self) -> String {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                self.rows
                    .iter()
                    .filter_map(|r| r.get(i))
                    .map(|c| UnicodeWidthStr::width(c.as_str()))
                    .chain([col.width, col.header.width()])
                    .max()
                    .unwrap_or(col.width)
            })
            .collect();

        let mut out = String::new();

        let header: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        push_line(&mut out, &header, &widths);

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            push_line(&mut out, &cells, &widths);
        }

        out
    }
}

fn push_line(out: &mut String, cells: &[&str], widths: &[usize]) {
    let mut line = String::new();
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).copied().unwrap_or("");
        line.push_str(cell);
        let pad = w.saturating_sub(cell.width()) + 1;
        line.push_str(&" ".repeat(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_widen_to_fit_content() {
        let mut t = Table::new(vec![Column::new("ID", 2), Column::new("LINE", 4)]);
        t.add_row(vec!["1".into(), "Assembly".into()]);
        t.add_row(vec!["22".into(), "L2".into()]);

        let out = t.render();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "ID LINE");
        assert_eq!(lines[1], "1  Assembly");
        assert_eq!(lines[2], "22 L2");
    }
}
