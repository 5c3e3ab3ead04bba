//! Command implementations and dispatch.

pub mod check;
pub mod show;
pub mod version_file;

use std::path::PathBuf;

use anyhow::Result;
use ota_config::ConfigLoader;

use crate::args::{Cli, Commands};

/// Execute the parsed command.
pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check => check::run(cli.config_path),
        Commands::Show { output } => show::run(cli.config_path, &output),
        Commands::VersionFile { command } => version_file::run(command),
    }
}

/// Build a loader with the CLI path override applied on top of the
/// environment.
pub(crate) fn build_loader(config_path: Option<PathBuf>) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    loader.from_env()
}
