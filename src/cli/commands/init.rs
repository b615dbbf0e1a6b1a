use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use std::path::Path;

/// Handle the `init` command: write a default configuration file.
pub fn handle(cmd: &Commands, path: Option<&Path>) -> AppResult<()> {
    if let Commands::Init { force } = cmd {
        let target = path.map(Path::to_path_buf).unwrap_or_else(Config::config_file);

        if target.exists() && !*force {
            warning(format!(
                "Configuration file already exists: {} (use --force to overwrite)",
                target.display()
            ));
            return Ok(());
        }

        let written = Config::init_all(Some(target.as_path()))?;
        success(format!("Config file: {}", written.display()));
    }

    Ok(())
}
