//! Show command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

/// Placeholder printed in place of the broker password. The real value
/// never leaves the loaded config.
const REDACTED: &str = "********";

pub fn run(config_path: Option<PathBuf>, output: &str) -> Result<()> {
    let loader = super::build_loader(config_path);
    let path = loader.resolved_path();

    let params = loader
        .load()
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;

    match output {
        "table" => {
            println!("config file:   {}", path.display());
            println!("broker:        {}", params.broker);
            println!("port:          {}", params.port);
            println!("username:      {}", params.username);
            println!("password:      {}", REDACTED);
            println!("command topic: {}", params.command_topic);
            println!("status topic:  {}", params.status_topic);
        }
        "json" => {
            let value = serde_json::json!({
                "broker": params.broker,
                "port": params.port,
                "username": params.username,
                "password": REDACTED,
                "command_topic": params.command_topic,
                "status_topic": params.status_topic,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        other => bail!("Unsupported output format: {} (expected table or json)", other),
    }

    Ok(())
}
