//! Path management for Birthwatch
//!
//! Provides platform-aware path resolution for configuration, data, and the
//! audit log.
//!
//! ## Path Resolution Order
//!
//! 1. `BIRTHWATCH_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/birthwatch` on Linux)
//! 3. `$XDG_CONFIG_HOME/birthwatch` or `~/.config/birthwatch`

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::BirthwatchError;
use crate::storage::Namespace;

/// Manages all paths used by Birthwatch
#[derive(Debug, Clone)]
pub struct BirthwatchPaths {
    /// Base directory for all Birthwatch data
    base_dir: PathBuf,
}

impl BirthwatchPaths {
    /// Create a new BirthwatchPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, BirthwatchError> {
        let base_dir = if let Ok(custom) = std::env::var("BIRTHWATCH_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create BirthwatchPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (namespaces and checklist)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path of a settings namespace file
    pub fn namespace_file(&self, namespace: Namespace) -> PathBuf {
        self.data_dir().join(format!("{}.json", namespace.as_str()))
    }

    /// Get the path to checklist.json
    pub fn checklist_file(&self) -> PathBuf {
        self.data_dir().join("checklist.json")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), BirthwatchError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| BirthwatchError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| BirthwatchError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, BirthwatchError> {
    if let Some(dirs) = ProjectDirs::from("", "", "birthwatch") {
        return Ok(dirs.config_dir().to_path_buf());
    }

    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                BirthwatchError::Config("Could not determine home directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("birthwatch"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BirthwatchPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BirthwatchPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
    }

    #[test]
    fn test_file_paths() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BirthwatchPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(
            paths.namespace_file(Namespace::Contacts),
            temp_dir.path().join("data").join("contacts.json")
        );
        assert_eq!(
            paths.checklist_file(),
            temp_dir.path().join("data").join("checklist.json")
        );
    }
}
