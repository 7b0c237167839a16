use crate::errors::{AppError, AppResult};
use crate::export::model::ShiftReport;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed (rows + totals).
pub(crate) fn export_json(report: &ShiftReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(report)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV: header (from serde), one line per record, totals line.
pub(crate) fn export_csv(report: &ShiftReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    write_csv(report, file)?;

    notify_export_success("CSV", path);
    Ok(())
}

pub(crate) fn write_csv<W: Write>(report: &ShiftReport, out: W) -> AppResult<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);

    if report.rows.is_empty() {
        wtr.write_record(super::model::HEADERS)
            .map_err(csv_error)?;
    }

    for row in &report.rows {
        wtr.serialize(row)
            .map_err(csv_error)?;
    }

    let totals: Vec<String> = report.totals_cells().iter().map(|c| c.display()).collect();
    wtr.write_record(&totals)
        .map_err(csv_error)?;

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    Ok(())
}

fn csv_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV write error: {e}"))
}
