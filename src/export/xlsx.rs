use crate::errors::AppResult;
use crate::export::model::ShiftReport;
use std::path::Path;

/// Render the report as a one-sheet XLSX workbook in memory.
#[cfg(feature = "xlsx")]
pub fn render_xlsx(report: &ShiftReport) -> AppResult<Vec<u8>> {
    use crate::export::model::{Cell, column_widths};
    use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(report.sheet_name())
        .map_err(to_export_error)?;

    let table = report.to_table();
    let last_row = table.len().saturating_sub(1);

    // ---------------------------
    // Formats
    // ---------------------------
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let totals_format = Format::new()
        .set_bold()
        .set_border(FormatBorder::Thin)
        .set_background_color(Color::RGB(0xD9D9D9))
        .set_pattern(FormatPattern::Solid);

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (r, row) in table.iter().enumerate() {
        let xl_row = r as u32;

        for (c, cell) in row.iter().enumerate() {
            let col = c as u16;

            let fmt = if r == 0 {
                header_format.clone()
            } else if r == last_row {
                totals_format.clone()
            } else {
                let band = if r % 2 == 1 { band1 } else { band2 };
                Format::new()
                    .set_background_color(band)
                    .set_pattern(FormatPattern::Solid)
                    .set_border(FormatBorder::Thin)
            };

            match cell {
                Cell::Text(s) => {
                    worksheet
                        .write_with_format(xl_row, col, s.as_str(), &fmt)
                        .map_err(to_export_error)?;
                }
                Cell::Int(n) => {
                    let fmt = fmt.set_align(FormatAlign::Right);
                    worksheet
                        .write_with_format(xl_row, col, *n as f64, &fmt)
                        .map_err(to_export_error)?;
                }
            }
        }
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in column_widths(&table).iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64)
            .map_err(to_export_error)?;
    }

    workbook.save_to_buffer().map_err(to_export_error)
}

/// Built without the `xlsx` feature: the spreadsheet engine is missing.
#[cfg(not(feature = "xlsx"))]
pub fn render_xlsx(_report: &ShiftReport) -> AppResult<Vec<u8>> {
    Err(crate::errors::AppError::ExportEngineUnavailable)
}

/// Export XLSX to a file.
pub(crate) fn export_xlsx(report: &ShiftReport, path: &Path) -> AppResult<()> {
    crate::ui::messages::info(format!("Exporting to XLSX: {}", path.display()));

    let bytes = render_xlsx(report)?;
    std::fs::write(path, bytes)?;

    crate::export::notify_export_success("XLSX", path);
    Ok(())
}

#[cfg(feature = "xlsx")]
fn to_export_error<E: std::fmt::Display>(e: E) -> crate::errors::AppError {
    crate::errors::AppError::Export(e.to_string())
}


#[cfg(all(test, not(feature = "xlsx")))]
mod engine_missing_tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::Shift;
    use chrono::NaiveDate;

    #[test]
    fn render_reports_missing_engine() {
        let report = ShiftReport::build(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), Shift::A, &[]);
        assert!(matches!(
            render_xlsx(&report),
            Err(AppError::ExportEngineUnavailable)
        ));
    }
}
