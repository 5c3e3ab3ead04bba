//! Rollout version marker file.
//!
//! Responsibilities:
//! - Track the firmware version currently being rolled out in a small
//!   marker file (`version.txt` by default).
//! - Keep the marker's lifecycle explicit: written when a rollout is
//!   prepared, removed when it completes, absent when nothing is in
//!   flight.
//!
//! Does NOT handle:
//! - Firmware transfer, rollback, or any MQTT traffic.
//!
//! Invariants:
//! - A missing marker is a normal state, not an error.
//! - Stored versions are trimmed; the file holds the version string and
//!   nothing else.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default marker file name, resolved relative to the working directory.
pub const DEFAULT_VERSION_FILE: &str = "version.txt";

/// Handle to the rollout version marker file.
pub struct VersionFile {
    path: PathBuf,
}

impl VersionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a rollout marker is present.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Record `version` as the rollout in progress, replacing any
    /// previous marker.
    pub fn write(&self, version: &str) -> io::Result<()> {
        fs::write(&self.path, version.trim())
    }

    /// Read the recorded version, or `None` when no rollout is in
    /// flight.
    pub fn read(&self) -> io::Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Remove the marker. Returns whether a marker existed.
    pub fn remove(&self) -> io::Result<bool> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e),
        }
    }
}
