use crate::models::{Shift, StoredRecord};
use chrono::NaiveDate;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

/// Column headers of a shift report, in order.
pub const HEADERS: [&str; 9] = [
    "Date",
    "Time",
    "Shift",
    "Line",
    "Product",
    "Operator",
    "Good Count",
    "Defects",
    "Notes",
];

/// Upper bound for a sized column.
pub const MAX_COLUMN_WIDTH: usize = 40;

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Int(u64),
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    pub fn display(&self) -> String {
        match self {
            Cell::Text(s) => s.clone(),
            Cell::Int(n) => n.to_string(),
        }
    }
}

/// "Flat" row of a shift report; field names double as CSV headers.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time")]
    pub time: String,
    #[serde(rename = "Shift")]
    pub shift: String,
    #[serde(rename = "Line")]
    pub line: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Operator")]
    pub operator: String,
    #[serde(rename = "Good Count")]
    pub good_count: u32,
    #[serde(rename = "Defects")]
    pub defects: u32,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl ReportRow {
    pub fn from_record(r: &StoredRecord) -> Self {
        let rec = &r.record;
        Self {
            date: rec.date_str(),
            time: rec.time_str(),
            shift: rec.shift.code().to_string(),
            line: rec.line.clone().unwrap_or_default(),
            product: rec.product.clone().unwrap_or_default(),
            operator: rec.operator.clone().unwrap_or_default(),
            good_count: rec.count,
            defects: rec.defects,
            notes: rec.notes.clone().unwrap_or_default(),
        }
    }

    pub fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(&self.date),
            Cell::text(&self.time),
            Cell::text(&self.shift),
            Cell::text(&self.line),
            Cell::text(&self.product),
            Cell::text(&self.operator),
            Cell::Int(u64::from(self.good_count)),
            Cell::Int(u64::from(self.defects)),
            Cell::text(&self.notes),
        ]
    }
}

/// Production report for one date+shift pair.
#[derive(Serialize, Clone, Debug)]
pub struct ShiftReport {
    pub date: NaiveDate,
    pub shift: Shift,
    pub rows: Vec<ReportRow>,
    pub total_good: u64,
    pub total_defects: u64,
}

impl ShiftReport {
    pub fn build(date: NaiveDate, shift: Shift, records: &[StoredRecord]) -> Self {
        let rows: Vec<ReportRow> = records.iter().map(ReportRow::from_record).collect();
        let total_good = rows.iter().map(|r| u64::from(r.good_count)).sum();
        let total_defects = rows.iter().map(|r| u64::from(r.defects)).sum();

        Self {
            date,
            shift,
            rows,
            total_good,
            total_defects,
        }
    }

    pub fn totals_cells(&self) -> Vec<Cell> {
        vec![
            Cell::text(""),
            Cell::text(""),
            Cell::text(""),
            Cell::text(""),
            Cell::text(""),
            Cell::text("Totals"),
            Cell::Int(self.total_good),
            Cell::Int(self.total_defects),
            Cell::text(""),
        ]
    }

    /// Header row, one row per record, then the totals row.
    pub fn to_table(&self) -> Vec<Vec<Cell>> {
        let mut table = Vec::with_capacity(self.rows.len() + 2);
        table.push(HEADERS.iter().map(|h| Cell::text(*h)).collect());
        table.extend(self.rows.iter().map(ReportRow::cells));
        table.push(self.totals_cells());
        table
    }

    /// Sheet title, e.g. `2024-01-01-Shift-A`.
    pub fn sheet_name(&self) -> String {
        format!("{}-Shift-{}", self.date.format("%Y-%m-%d"), self.shift)
    }

    /// Download name, e.g. `production_2024-01-01_shift_A.xlsx`.
    pub fn file_name(&self, ext: &str) -> String {
        format!(
            "production_{}_shift_{}.{ext}",
            self.date.format("%Y-%m-%d"),
            self.shift
        )
    }
}

/// Content-based widths: longest cell + 2, capped at [`MAX_COLUMN_WIDTH`].
pub fn column_widths(table: &[Vec<Cell>]) -> Vec<usize> {
    let mut widths = vec![0usize; HEADERS.len()];
    for row in table {
        for (c, cell) in row.iter().enumerate() {
            let w = UnicodeWidthStr::width(cell.display().as_str());
            if let Some(slot) = widths.get_mut(c) {
                *slot = (*slot).max(w);
            }
        }
    }
    widths
        .into_iter()
        .map(|w| (w + 2).min(MAX_COLUMN_WIDTH))
        .collect()
}
