use crate::AppContext;
use crate::cli::commands::{load_view, use_color};
use crate::cli::parser::Commands;
use crate::core::aggregate::{description_distribution, hours_by_staff};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::chart::{bar_chart, distribution_chart};

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Chart { filters } = cmd {
        let (_, view) = load_view(ctx, filters);

        if view.is_empty() {
            info("No records in view.");
            return Ok(());
        }

        let color = use_color();

        header("Hours by Staff");
        print!("{}", bar_chart(&hours_by_staff(&view), color));

        header("MOC Distribution");
        print!("{}", distribution_chart(&description_distribution(&view), color));
    }
    Ok(())
}
