//! Plain-text charts for the terminal.

use crate::utils::colors::{RESET, palette};
use crate::utils::formatting::{format_hours, percentage};
use crate::utils::table::pad_right;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 30;

/// Horizontal bar chart: one bar per label, scaled to the largest value.
pub fn bar_chart(series: &[(String, f64)], color: bool) -> String {
    let max = series.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_w = label_width(series.iter().map(|(l, _)| l.as_str()));

    let mut out = String::new();
    for (i, (label, value)) in series.iter().enumerate() {
        let len = if max > 0.0 {
            ((value / max) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(len);
        let bar = if color {
            format!("{}{}{}", palette(i), bar, RESET)
        } else {
            bar
        };
        out.push_str(&format!(
            "{} {} {}\n",
            pad_right(label, label_w),
            bar,
            format_hours(*value)
        ));
    }
    out
}

/// Share of records per label, with percentages to one decimal place.
pub fn distribution_chart(series: &[(String, usize)], color: bool) -> String {
    let total: usize = series.iter().map(|(_, c)| *c).sum();
    let label_w = label_width(series.iter().map(|(l, _)| l.as_str()));

    let mut out = String::new();
    for (i, (label, count)) in series.iter().enumerate() {
        let pct = percentage(*count, total);
        let len = ((pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar = "▒".repeat(len);
        let bar = if color {
            format!("{}{}{}", palette(i), bar, RESET)
        } else {
            bar
        };
        out.push_str(&format!(
            "{} {} {:.1}% ({})\n",
            pad_right(label, label_w),
            bar,
            pct,
            count
        ));
    }
    out
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(UnicodeWidthStr::width).max().unwrap_or(0).min(24)
}
