//! Chrome profile directory management
//!
//! Eliminates SingletonLock conflicts between sessions via UUID-based naming.
//! All browser launch points MUST use this module for profile directory
//! creation.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

/// RAII wrapper for a Chrome profile directory
///
/// Automatically removes the directory on drop unless `into_path()` is
/// called, so orphaned profiles don't accumulate in temp when a launch
/// fails partway.
#[derive(Debug)]
pub struct BrowserProfile {
    path: PathBuf,
    cleanup_on_drop: bool,
}

impl BrowserProfile {
    fn new(path: PathBuf) -> Self {
        Self {
            path,
            cleanup_on_drop: true,
        }
    }

    /// Get reference to the profile directory path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consume the profile and return the path, disabling auto-cleanup.
    ///
    /// Use this when transferring ownership to another cleanup mechanism
    /// (the session wrapper).
    pub fn into_path(mut self) -> PathBuf {
        self.cleanup_on_drop = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for BrowserProfile {
    fn drop(&mut self) {
        if self.cleanup_on_drop && self.path.exists() {
            debug!("BrowserProfile cleanup: removing {}", self.path.display());
            if let Err(e) = std::fs::remove_dir_all(&self.path) {
                warn!(
                    "Failed to cleanup profile directory {}: {}",
                    self.path.display(),
                    e
                );
            }
        }
    }
}

/// Create a unique Chrome profile directory with the given prefix.
///
/// UUID v4 naming keeps concurrent and crashed sessions from ever sharing a
/// profile (Chrome refuses to start on a locked one).
pub fn create_unique_profile_with_prefix(prefix: &str) -> Result<BrowserProfile> {
    let uuid = Uuid::new_v4();
    let path = std::env::temp_dir().join(format!("{prefix}_{uuid}"));

    debug!("Creating Chrome profile directory: {}", path.display());

    // create_dir, not create_dir_all: atomic creation fails if the directory
    // already exists, guarding against UUID collision
    std::fs::create_dir(&path)
        .with_context(|| format!("Failed to create profile directory: {}", path.display()))?;

    Ok(BrowserProfile::new(path))
}
