//! Path resolution for tempo configuration and data files.
//!
//! All tempo data is stored in `~/.tempo/`:
//! - `config.yaml` - settings and body profile
//! - `tempo.db` - `SQLite` database with routines and the workout log
//! - `routines/` - drop-in YAML routine definitions, imported on every run

use std::path::PathBuf;

use crate::error::TempoError;

/// Paths to tempo configuration and data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tempo/`
    pub root: PathBuf,
    /// Config file: `~/.tempo/config.yaml`
    pub config_file: PathBuf,
    /// Database file: `~/.tempo/tempo.db`
    pub database: PathBuf,
    /// Routine definitions: `~/.tempo/routines/`
    pub routines: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TempoError> {
        let home = std::env::var("HOME")
            .map_err(|_| TempoError::Config("Could not determine home directory".to_string()))?;

        Ok(Self::with_root(PathBuf::from(home).join(".tempo")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            database: root.join("tempo.db"),
            routines: root.join("routines"),
            root,
        }
    }

    /// Ensure all directories exist.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TempoError> {
        for dir in [&self.root, &self.routines] {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    TempoError::Config(format!(
                        "Failed to create directory {}: {e}",
                        dir.display()
                    ))
                })?;
            }
        }

        Ok(())
    }
}
