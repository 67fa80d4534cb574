use super::level::Level;
use crate::core::classify::classify;
use chrono::Local;

/// One logged unit of MOC work.
///
/// Field order matches the persisted CSV columns:
/// `staff_name, description, hours_spent, moc_count, month, level`.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub staff_name: String,
    pub description: String,
    pub hours_spent: f64,
    pub moc_count: u32,
    pub month: String, // English month name at creation ("March")
    pub level: Level,  // cache of classify(); recomputed on every load/insert
}

impl ActivityRecord {
    /// Build a new record stamped with the current month.
    /// The level is computed immediately from count and hours.
    pub fn new(staff_name: &str, description: &str, hours_spent: f64, moc_count: u32) -> Self {
        Self::with_month(
            staff_name,
            description,
            hours_spent,
            moc_count,
            &current_month_name(),
        )
    }

    pub fn with_month(
        staff_name: &str,
        description: &str,
        hours_spent: f64,
        moc_count: u32,
        month: &str,
    ) -> Self {
        Self {
            staff_name: staff_name.to_string(),
            description: description.to_string(),
            hours_spent,
            moc_count,
            month: month.to_string(),
            level: classify(moc_count, hours_spent),
        }
    }
}

/// Full English name of the current local month ("October").
pub fn current_month_name() -> String {
    Local::now().format("%B").to_string()
}
