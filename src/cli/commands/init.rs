use crate::AppContext;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - an empty dataset file with the column header
pub fn handle(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    let cfg = Config::init_all(ctx.data_override.clone(), cli.test)?;

    info("Initializing mocboard…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }

    let store = Store::new(cfg.dataset_path());
    if store.init()? {
        success(format!("Dataset created at {}", store.path().display()));
    } else {
        info(format!("Dataset already present at {}", store.path().display()));
    }

    success("mocboard initialization completed!");
    Ok(())
}
