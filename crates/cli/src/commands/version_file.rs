//! Version marker command implementation.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Subcommand;

use crate::version_file::{DEFAULT_VERSION_FILE, VersionFile};

#[derive(Subcommand)]
pub enum VersionFileCommand {
    /// Record the firmware version for the rollout in progress
    Set {
        /// Firmware version being rolled out (e.g., 1.4.2)
        version: String,

        /// Marker file location
        #[arg(long, value_name = "FILE", default_value = DEFAULT_VERSION_FILE)]
        file: PathBuf,
    },

    /// Print the firmware version currently being rolled out
    Show {
        /// Marker file location
        #[arg(long, value_name = "FILE", default_value = DEFAULT_VERSION_FILE)]
        file: PathBuf,
    },

    /// Remove the marker once the rollout completes
    Clear {
        /// Marker file location
        #[arg(long, value_name = "FILE", default_value = DEFAULT_VERSION_FILE)]
        file: PathBuf,
    },
}

pub fn run(command: VersionFileCommand) -> Result<()> {
    match command {
        VersionFileCommand::Set { version, file } => {
            let version = version.trim();
            if version.is_empty() {
                bail!("Version must not be blank");
            }

            let marker = VersionFile::new(file);
            marker.write(version).with_context(|| {
                format!(
                    "Failed to write version marker at {}",
                    marker.path().display()
                )
            })?;
            println!("Rollout version {} recorded at {}", version, marker.path().display());
        }

        VersionFileCommand::Show { file } => {
            let marker = VersionFile::new(file);
            match marker.read().with_context(|| {
                format!(
                    "Failed to read version marker at {}",
                    marker.path().display()
                )
            })? {
                Some(version) => println!("{}", version),
                None => println!("No rollout in progress"),
            }
        }

        VersionFileCommand::Clear { file } => {
            let marker = VersionFile::new(file);
            let removed = marker.remove().with_context(|| {
                format!(
                    "Failed to remove version marker at {}",
                    marker.path().display()
                )
            })?;
            if removed {
                println!("Version marker removed");
            } else {
                println!("No version marker to remove");
            }
        }
    }

    Ok(())
}
