use crate::AppContext;
use crate::cli::commands::{load_view, use_color};
use crate::cli::parser::Commands;
use crate::core::aggregate::totals;
use crate::errors::AppResult;
use crate::models::ActivityRecord;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{RESET, color_for_level};
use crate::utils::format_hours;
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::List { filters } = cmd {
        let (dataset, view) = load_view(ctx, filters);

        if dataset.is_empty() {
            warning("No data found.");
            return Ok(());
        }

        if view.is_empty() {
            info("No records match the selected filters.");
        } else {
            print!("{}", render_records(&view, use_color()));
        }

        let t = totals(&view);
        header("Summary");
        println!(
            "{} {}   {} {}   {} {}",
            bold("Total MOCs:"),
            t.total_mocs,
            bold("Total Hours:"),
            format_hours(t.total_hours),
            bold("Unique Staff:"),
            t.unique_staff
        );
    }
    Ok(())
}

pub(crate) fn render_records(records: &[ActivityRecord], color: bool) -> String {
    let mut table = Table::new(vec![
        Column::new("Staff", 18),
        Column::new("Description", 30),
        Column::new("Hours", 6),
        Column::new("MOCs", 5),
        Column::new("Month", 10),
        Column::new("Level", 5),
    ]);

    for rec in records {
        let level = if color {
            format!("{}{}{}", color_for_level(rec.level), rec.level, RESET)
        } else {
            rec.level.to_string()
        };
        table.add_row(vec![
            rec.staff_name.clone(),
            rec.description.clone(),
            format_hours(rec.hours_spent),
            rec.moc_count.to_string(),
            rec.month.clone(),
            level,
        ]);
    }

    table.render()
}
