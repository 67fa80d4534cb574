use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::export::pdf::PdfManager;
use crate::models::PromotionSummary;
use crate::ui::messages::info;
use crate::utils::formatting::summary_line;
use std::fs;
use std::path::Path;

/// Render the summary report in memory: title line, then one
/// `"{staff} | Level {level} | {count} MOCs | {hours} hrs"` line per row.
pub fn render_pdf(rows: &[PromotionSummary], title: &str) -> Vec<u8> {
    let lines: Vec<String> = rows.iter().map(|r| summary_line(r, "hrs")).collect();

    let mut pdf = PdfManager::new();
    pdf.write_report(title, &lines);
    pdf.finish()
}

pub(crate) fn export_pdf(rows: &[PromotionSummary], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let bytes = render_pdf(rows, title);
    fs::write(path, bytes)?;

    notify_export_success("PDF", path);
    Ok(())
}
