use crate::core::filter::{RecordFilter, parse_report_key};
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::query_records;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::ShiftReport;
use crate::export::xlsx::export_xlsx;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Load the records of one date+shift pair into a report.
    ///
    /// The shift is validated before the date.
    pub fn load_report(pool: &DbPool, date: &str, shift: &str) -> AppResult<ShiftReport> {
        let (date, shift) = parse_report_key(date, shift)?;
        let records = query_records(&pool.conn, &RecordFilter::exact(date, shift))?;
        Ok(ShiftReport::build(date, shift, &records))
    }

    /// Export a shift report to `file`.
    ///
    /// - `format`: xlsx | csv | json
    /// - `file`: absolute output path
    pub fn export(
        pool: &mut DbPool,
        format: &ExportFormat,
        file: &str,
        date: &str,
        shift: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let report = Self::load_report(pool, date, shift)?;

        ensure_writable(path, force)?;

        if report.rows.is_empty() {
            warning(format!(
                "No records for {} shift {}: exporting header and totals only.",
                report.date, report.shift
            ));
        }

        match format {
            ExportFormat::Xlsx => export_xlsx(&report, path)?,
            ExportFormat::Csv => export_csv(&report, path)?,
            ExportFormat::Json => export_json(&report, path)?,
        }

        if let Err(e) = ttlog(
            &pool.conn,
            "export",
            &report.sheet_name(),
            &format!(
                "Exported {} record(s) as {} to {}",
                report.rows.len(),
                format.as_str(),
                path.display()
            ),
        ) {
            tracing::warn!(error = %e, "failed to write export audit line");
        }

        Ok(())
    }
}
