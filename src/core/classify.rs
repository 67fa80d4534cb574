//! Per-record level rule.
//!
//! Each record is classified from its own count and hours, never from a
//! staff-wide total.

use crate::models::{Dataset, Level};

pub const LEVEL7_MIN_MOCS: u32 = 5;
pub const LEVEL7_MIN_HOURS: f64 = 20.0;
pub const LEVEL5_MIN_MOCS: u32 = 3;
pub const LEVEL5_MIN_HOURS: f64 = 10.0;

/// Map (count, hours) to a level. Pure and total.
pub fn classify(moc_count: u32, hours_spent: f64) -> Level {
    if moc_count >= LEVEL7_MIN_MOCS && hours_spent >= LEVEL7_MIN_HOURS {
        Level::Seven
    } else if moc_count >= LEVEL5_MIN_MOCS && hours_spent >= LEVEL5_MIN_HOURS {
        Level::Five
    } else {
        Level::Three
    }
}

/// Re-apply `classify` to every record. Idempotent.
pub fn reclassify(dataset: &mut Dataset) {
    for rec in dataset.iter_mut() {
        rec.level = classify(rec.moc_count, rec.hours_spent);
    }
}
