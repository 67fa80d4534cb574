use crate::AppContext;
use crate::cli::commands::load_view;
use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::{ExportLogic, ExportScope};
use tracing::debug;

pub fn handle(cmd: &Commands, ctx: &AppContext) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        candidates,
        force,
        filters,
    } = cmd
    {
        let (_, view) = load_view(ctx, filters);

        let scope = if *candidates {
            ExportScope::Candidates
        } else {
            ExportScope::Summary
        };

        debug!(format = format.as_str(), file = %file, ?scope, "export requested");
        ExportLogic::export(&view, format, file, scope, *force, &ctx.cfg.report_title)?;
    }
    Ok(())
}
