mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;
pub mod xlsx;

pub use logic::ExportLogic;
pub use model::{ReportRow, ShiftReport};
pub use xlsx::render_xlsx;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// MIME type of an XLSX workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
