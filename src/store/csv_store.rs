use crate::core::classify::reclassify;
use crate::errors::{AppError, AppResult};
use crate::models::{ActivityRecord, Dataset};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Fixed schema of the persisted table.
pub const COLUMNS: [&str; 6] = [
    "staff_name",
    "description",
    "hours_spent",
    "moc_count",
    "month",
    "level",
];

/// Row as read from disk. The stored `level` column is not read; the level is
/// always recomputed from count and hours.
#[derive(Debug, Deserialize)]
struct StoredRow {
    staff_name: String,
    description: String,
    hours_spent: f64,
    moc_count: u32,
    month: String,
}

impl From<StoredRow> for ActivityRecord {
    fn from(row: StoredRow) -> Self {
        ActivityRecord::with_month(
            &row.staff_name,
            &row.description,
            row.hours_spent,
            row.moc_count,
            &row.month,
        )
    }
}

/// CSV-backed dataset store (single user, single process).
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the dataset. Never fails: a missing or corrupt file yields an
    /// empty dataset.
    pub fn load(&self) -> Dataset {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "dataset file not found, starting empty");
            return Dataset::new();
        }

        match self.read_rows() {
            Ok(mut rows) => {
                reclassify(&mut rows);
                debug!(path = %self.path.display(), rows = rows.len(), "dataset loaded");
                rows
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "unreadable dataset, starting empty");
                Dataset::new()
            }
        }
    }

    fn read_rows(&self) -> AppResult<Dataset> {
        let mut rdr = csv::Reader::from_path(&self.path)?;

        let headers = rdr.headers()?.clone();
        for col in &COLUMNS[..5] {
            if !headers.iter().any(|h| h == *col) {
                return Err(AppError::Other(format!("missing column '{col}'")));
            }
        }

        let mut rows = Dataset::new();
        for result in rdr.deserialize::<StoredRow>() {
            rows.push(result?.into());
        }
        Ok(rows)
    }

    /// Overwrite the file with the full dataset (header always written).
    pub fn save(&self, dataset: &Dataset) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut wtr = csv::Writer::from_path(&self.path)?;
        wtr.write_record(COLUMNS)?;

        for rec in dataset {
            wtr.write_record(&[
                rec.staff_name.clone(),
                rec.description.clone(),
                rec.hours_spent.to_string(),
                rec.moc_count.to_string(),
                rec.month.clone(),
                rec.level.to_string(),
            ])?;
        }

        wtr.flush()?;
        debug!(path = %self.path.display(), rows = dataset.len(), "dataset saved");
        Ok(())
    }

    /// Create an empty dataset file (header only) unless one already exists.
    /// Returns `true` when a new file was written.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        self.save(&Dataset::new())?;
        Ok(true)
    }
}
