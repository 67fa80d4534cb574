use super::level::Level;
use serde::Serialize;

/// Summed activity for one (staff, level) group of the records in view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PromotionSummary {
    pub staff_name: String,
    pub level: Level,
    pub moc_count: u64,
    pub hours_spent: f64,
}

/// Headline figures shown under the records table.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub total_mocs: u64,
    pub total_hours: f64,
    pub unique_staff: usize,
}
