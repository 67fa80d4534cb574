//! Formatting utilities used for CLI and export outputs.

use crate::models::PromotionSummary;

/// Hours as a human would write them: `12` for whole values, `12.5` otherwise.
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.abs() < 1e15 {
        format!("{}", hours as i64)
    } else {
        format!("{}", hours)
    }
}

/// `"{staff} | Level {level} | {count} MOCs | {hours} {unit}"`
///
/// The PDF report uses the unit `hrs`, the e-mail body `Hours`.
pub fn summary_line(row: &PromotionSummary, hours_unit: &str) -> String {
    format!(
        "{} | Level {} | {} MOCs | {} {}",
        row.staff_name,
        row.level,
        row.moc_count,
        format_hours(row.hours_spent),
        hours_unit
    )
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(12.0), "12");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(12.5), "12.5");
    }

    #[test]
    fn test_summary_line_units() {
        let row = PromotionSummary {
            staff_name: "Alice".to_string(),
            level: Level::Five,
            moc_count: 3,
            hours_spent: 10.0,
        };
        assert_eq!(summary_line(&row, "hrs"), "Alice | Level 5 | 3 MOCs | 10 hrs");
        assert_eq!(summary_line(&row, "Hours"), "Alice | Level 5 | 3 MOCs | 10 Hours");
    }
}
