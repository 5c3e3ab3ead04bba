//! Check command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

pub fn run(config_path: Option<PathBuf>) -> Result<()> {
    let loader = super::build_loader(config_path);
    let path = loader.resolved_path();

    info!("Checking deployment config at {}", path.display());

    let params = loader
        .load()
        .with_context(|| format!("Configuration check failed for {}", path.display()))?;

    println!("Configuration OK: {}", path.display());
    println!("  broker:        {}:{}", params.broker, params.port);
    println!("  username:      {}", params.username);
    println!("  command topic: {}", params.command_topic);
    println!("  status topic:  {}", params.status_topic);

    Ok(())
}
