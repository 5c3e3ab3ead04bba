//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see the `commands` module).
//! - Does not handle config loading (see the `ota-config` crate).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands;

#[derive(Parser)]
#[command(name = "ota-deploy")]
#[command(about = "OTA deploy - manage MQTT deployment configuration and rollout state", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  ota-deploy check\n  ota-deploy show --output json\n  CONFIG_PATH=/etc/ota/config.json ota-deploy check\n  ota-deploy version-file set 1.4.2\n  ota-deploy version-file clear\n"
)]
pub struct Cli {
    /// Path to the deployment configuration file (overrides CONFIG_PATH).
    ///
    /// When neither this flag nor CONFIG_PATH is set, the loader reads
    /// ota_deploy_config.json from the working directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the deployment configuration
    Check,

    /// Print the resolved MQTT connection parameters
    Show {
        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        output: String,
    },

    /// Manage the rollout version marker file
    VersionFile {
        #[command(subcommand)]
        command: commands::version_file::VersionFileCommand,
    },
}
