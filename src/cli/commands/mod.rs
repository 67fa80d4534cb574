pub mod add;
pub mod chart;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod promote;
pub mod summary;

use crate::AppContext;
use crate::cli::parser::FilterArgs;
use crate::core::aggregate::filter;
use crate::models::Dataset;
use crate::store::Store;
use std::io::IsTerminal;

/// Load the full dataset and the filtered view of it.
pub(crate) fn load_view(ctx: &AppContext, filters: &FilterArgs) -> (Dataset, Dataset) {
    let store = Store::new(ctx.cfg.dataset_path());
    let dataset = store.load();
    let view = filter(&dataset, &filters.to_filter());
    (dataset, view)
}

/// Colors only when writing to a terminal.
pub(crate) fn use_color() -> bool {
    std::io::stdout().is_terminal()
}
