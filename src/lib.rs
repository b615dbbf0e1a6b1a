//! rContainerLog library root.
//! Exposes the CLI parser, the high-level run() function, and the record
//! store with its entry/edit/delete workflows.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::PathBuf;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: Config) -> AppResult<()> {
    let config_path = cli.config.as_deref().map(utils::path::expand_tilde);

    match &cli.command {
        Some(cmd @ Commands::Init { .. }) => cli::commands::init::handle(cmd, config_path.as_deref()),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, &cfg, config_path.as_deref())
        }
        Some(Commands::Shell { script, no_color }) => {
            cli::commands::shell::handle(cfg, script.as_deref(), *no_color)
        }
        None => cli::commands::shell::handle(cfg, None, false),
    }
}

/// Load the configuration file and apply command-line overrides.
pub fn load_config(cli: &Cli) -> AppResult<Config> {
    let path: Option<PathBuf> = cli.config.as_deref().map(utils::path::expand_tilde);
    let mut cfg = Config::load(path.as_deref())?;

    if let Some(lang) = cli.lang {
        cfg.language = lang;
    }
    if cli.strict {
        cfg.strict_validation = true;
    }

    Ok(cfg)
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ diagnostics on stderr
    logging::setup_logging();

    // 3️⃣ load config once, with CLI overrides
    let cfg = load_config(&cli)?;
    tracing::debug!(?cfg, "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, cfg)
}
