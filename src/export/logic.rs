use crate::core::aggregate::{promotion_candidates, summarize};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::pdf_export::export_pdf;
use crate::export::xlsx::export_xlsx;
use crate::models::ActivityRecord;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

/// What goes into the exported report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportScope {
    /// Every (staff, level) group of the records in view.
    Summary,
    /// Only the groups flagged by the promotion watch.
    Candidates,
}

impl ExportLogic {
    /// Export the summary of `view` (already filtered) to `file`.
    pub fn export(
        view: &[ActivityRecord],
        format: &ExportFormat,
        file: &str,
        scope: ExportScope,
        force: bool,
        title: &str,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if path.as_os_str().is_empty() {
            return Err(AppError::Export("output file path is empty".to_string()));
        }

        ensure_writable(path, force)?;

        let summary = summarize(view);
        let rows = match scope {
            ExportScope::Summary => summary,
            ExportScope::Candidates => promotion_candidates(&summary),
        };

        if rows.is_empty() {
            warning("No rows for the selected view; the report will be empty.");
        }

        match format {
            ExportFormat::Pdf => export_pdf(&rows, path, title)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(())
    }
}
