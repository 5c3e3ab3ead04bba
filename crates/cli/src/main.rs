//! ota-deploy - operator CLI for the MQTT-based OTA deployment system.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load and validate the deployment configuration via `ota-config`.
//! - Translate configuration failures into diagnostics on stderr and
//!   structured process exit codes.
//!
//! Does NOT handle:
//! - MQTT network I/O (devices and the command/status client own that).
//! - Firmware transfer or rollback.
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   `CONFIG_PATH`.
//! - This is the ONLY place in the workspace that calls
//!   `std::process::exit`; the config crate returns typed errors.

mod args;
mod commands;
mod error;
mod version_file;

use args::Cli;
use clap::Parser;
use commands::run_command;
use error::{ExitCode, ExitCodeExt};
use ota_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env BEFORE CLI parsing so CONFIG_PATH can come from a dotenv file
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
