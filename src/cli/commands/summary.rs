use crate::AppContext;
use crate::cli::commands::load_view;
use crate::cli::parser::Commands;
use crate::core::aggregate::summarize;
use crate::errors::AppResult;
use crate::models::PromotionSummary;
use crate::ui::messages::{header, info};
use crate::utils::format_hours;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Summary { filters } = cmd {
        let (_, view) = load_view(ctx, filters);
        let rows = summarize(&view);

        header("Summary by staff and level");
        if rows.is_empty() {
            info("No records in view.");
        } else {
            print!("{}", render_summary(&rows));
        }
    }
    Ok(())
}

pub(crate) fn render_summary(rows: &[PromotionSummary]) -> String {
    let mut table = Table::new(vec![
        Column::new("Staff", 18),
        Column::new("Level", 5),
        Column::new("MOCs", 6),
        Column::new("Hours", 8),
    ]);

    for row in rows {
        table.add_row(vec![
            row.staff_name.clone(),
            row.level.to_string(),
            row.moc_count.to_string(),
            format_hours(row.hours_spent),
        ]);
    }

    table.render()
}
