use crate::core::classify::reclassify;
use crate::errors::{AppError, AppResult};
use crate::models::ActivityRecord;
use crate::store::Store;
use tracing::info;

/// Result of an `add` request.
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Entry appended and dataset rewritten; carries the stored record.
    Added(ActivityRecord),
    /// Blank name or description: nothing recorded.
    Skipped,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Load → append → reclassify all → save.
    pub fn apply(
        store: &Store,
        staff_name: &str,
        description: &str,
        hours_spent: f64,
        moc_count: u32,
    ) -> AppResult<AddOutcome> {
        let name = staff_name.trim();
        let desc = description.trim();

        if name.is_empty() || desc.is_empty() {
            return Ok(AddOutcome::Skipped);
        }

        if !hours_spent.is_finite() || hours_spent < 0.0 {
            return Err(AppError::InvalidHours(hours_spent));
        }
        if moc_count == 0 {
            return Err(AppError::InvalidCount(moc_count));
        }

        let record = ActivityRecord::new(name, desc, hours_spent, moc_count);

        let mut dataset = store.load();
        dataset.push(record.clone());
        reclassify(&mut dataset);
        store.save(&dataset)?;

        info!(
            staff = %record.staff_name,
            level = %record.level,
            rows = dataset.len(),
            "MOC entry recorded"
        );

        Ok(AddOutcome::Added(record))
    }
}
