//! Filtering and (staff, level) aggregation over the records in view.

use crate::models::{ActivityRecord, Dataset, Level, PromotionSummary, Totals};
use std::collections::{BTreeMap, BTreeSet};

/// Promotion watch thresholds. They apply to summed (staff, level) groups
/// and are independent from the per-record classifier thresholds.
pub const PROMOTION_MIN_MOCS: u64 = 5;
pub const PROMOTION_MIN_HOURS: f64 = 20.0;

/// Filter sets for the records view. An empty set matches everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub staff: Vec<String>,
    pub levels: Vec<Level>,
    pub months: Vec<String>,
}

impl RecordFilter {
    pub fn matches(&self, rec: &ActivityRecord) -> bool {
        (self.staff.is_empty() || self.staff.iter().any(|s| *s == rec.staff_name))
            && (self.levels.is_empty() || self.levels.contains(&rec.level))
            && (self.months.is_empty() || self.months.iter().any(|m| *m == rec.month))
    }
}

/// Keep the records matching every non-empty filter set, in input order.
pub fn filter(dataset: &[ActivityRecord], f: &RecordFilter) -> Dataset {
    dataset.iter().filter(|r| f.matches(r)).cloned().collect()
}

/// Group by (staff, level) and sum count and hours.
/// Rows come out ordered by staff name, then level.
pub fn summarize(dataset: &[ActivityRecord]) -> Vec<PromotionSummary> {
    let mut groups: BTreeMap<(&str, Level), (u64, f64)> = BTreeMap::new();

    for rec in dataset {
        let entry = groups
            .entry((rec.staff_name.as_str(), rec.level))
            .or_insert((0, 0.0));
        entry.0 += u64::from(rec.moc_count);
        entry.1 += rec.hours_spent;
    }

    groups
        .into_iter()
        .map(|((staff, level), (moc_count, hours_spent))| PromotionSummary {
            staff_name: staff.to_string(),
            level,
            moc_count,
            hours_spent,
        })
        .collect()
}

/// Summary rows whose summed activity crosses the promotion thresholds while
/// the group is still below level 7.
pub fn promotion_candidates(summary: &[PromotionSummary]) -> Vec<PromotionSummary> {
    summary
        .iter()
        .filter(|row| {
            row.moc_count >= PROMOTION_MIN_MOCS
                && row.hours_spent >= PROMOTION_MIN_HOURS
                && row.level < Level::Seven
        })
        .cloned()
        .collect()
}

pub fn totals(dataset: &[ActivityRecord]) -> Totals {
    let staff: BTreeSet<&str> = dataset.iter().map(|r| r.staff_name.as_str()).collect();

    Totals {
        total_mocs: dataset.iter().map(|r| u64::from(r.moc_count)).sum(),
        total_hours: dataset.iter().map(|r| r.hours_spent).sum(),
        unique_staff: staff.len(),
    }
}

/// Bar chart series: hours summed per staff member, by staff name.
pub fn hours_by_staff(dataset: &[ActivityRecord]) -> Vec<(String, f64)> {
    let mut acc: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in dataset {
        *acc.entry(rec.staff_name.as_str()).or_insert(0.0) += rec.hours_spent;
    }
    acc.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// Pie chart series: number of records per description, most frequent first
/// (ties by description).
pub fn description_distribution(dataset: &[ActivityRecord]) -> Vec<(String, usize)> {
    let mut acc: BTreeMap<&str, usize> = BTreeMap::new();
    for rec in dataset {
        *acc.entry(rec.description.as_str()).or_insert(0) += 1;
    }

    let mut out: Vec<(String, usize)> = acc.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}
