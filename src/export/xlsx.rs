use crate::errors::{AppError, AppResult};
use crate::export::model::{get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::models::PromotionSummary;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Export XLSX with a styled header, banded rows and auto-sized columns.
pub(crate) fn export_xlsx(rows: &[PromotionSummary], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    if rows.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_export_error)?;
        workbook.save(path).map_err(to_export_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    for (row_index, summary) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        let text_fmt = Format::new()
            .set_background_color(band_color)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin);
        let num_fmt = text_fmt.clone().set_align(FormatAlign::Right);

        worksheet
            .write_with_format(row, 0, summary.staff_name.as_str(), &text_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 1, f64::from(summary.level.value()), &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 2, summary.moc_count as f64, &num_fmt)
            .map_err(to_export_error)?;
        worksheet
            .write_with_format(row, 3, summary.hours_spent, &num_fmt)
            .map_err(to_export_error)?;

        for (col, value) in summary_to_row(summary).iter().enumerate() {
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
