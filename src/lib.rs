//! mocboard library root.
//! Exposes the CLI parser, the high-level run() function and the core modules
//! (store, classifier, aggregator, export, notify).

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod notify;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use notify::MailCredentials;
use std::path::PathBuf;

/// Per-invocation state: configuration and mail credentials, read once.
pub struct AppContext {
    pub cfg: Config,
    pub mail: MailCredentials,
    /// Resolved `--data` path, when given.
    pub data_override: Option<PathBuf>,
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, ctx: &AppContext) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, ctx),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, ctx),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, ctx),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, ctx),
        Commands::Summary { .. } => cli::commands::summary::handle(&cli.command, ctx),
        Commands::Chart { .. } => cli::commands::chart::handle(&cli.command, ctx),
        Commands::Promote { .. } => cli::commands::promote::handle(&cli.command, ctx),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, ctx),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // optional .env next to the working directory (mail secrets)
    dotenvy::dotenv().ok();
    logging::init();

    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    // resolved once, so every command sees the same file
    let data_override = match &cli.data {
        Some(raw) => Some(Config::resolve_dataset(raw)?),
        None => None,
    };
    if let Some(path) = &data_override {
        cfg.dataset = path.to_string_lossy().to_string();
    }

    // login once per session, before anything touches the dataset
    if cli.command.requires_login() {
        crate::core::gate::check(&cfg, cli.user.as_deref(), cli.password.as_deref())?;
    }

    let ctx = AppContext {
        cfg,
        mail: MailCredentials::from_env(),
        data_override,
    };

    dispatch(&cli, &ctx)
}
