use crate::models::PromotionSummary;
use crate::utils::format_hours;

/// Header for CSV / XLSX summary exports
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["staff_name", "level", "moc_count", "hours_spent"]
}

pub(crate) fn summary_to_row(s: &PromotionSummary) -> Vec<String> {
    vec![
        s.staff_name.clone(),
        s.level.to_string(),
        s.moc_count.to_string(),
        format_hours(s.hours_spent),
    ]
}
