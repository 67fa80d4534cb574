use crate::AppContext;
use crate::cli::parser::Commands;
use crate::core::add::{AddLogic, AddOutcome};
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success};

/// Add a MOC entry.
pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Add {
        name,
        desc,
        hours,
        count,
    } = cmd
    {
        let store = Store::new(ctx.cfg.dataset_path());

        match AddLogic::apply(&store, name, desc, *hours, *count)? {
            AddOutcome::Added(rec) => success(format!(
                "Entry added for {} (Level {}, {}).",
                rec.staff_name, rec.level, rec.month
            )),
            AddOutcome::Skipped => info("Staff name and description are required; nothing recorded."),
        }
    }

    Ok(())
}
