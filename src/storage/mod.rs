//! Storage layer for Birthwatch
//!
//! Settings namespaces and the checklist are JSON files under the data
//! directory, written atomically.

pub mod checklist;
pub mod file_io;
pub mod init;
pub mod json_store;
pub mod kv;
pub mod settings_repo;

pub use checklist::ChecklistRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use json_store::JsonFileStore;
pub use kv::{KeyValueStore, MemoryStore, Namespace, Value};
pub use settings_repo::SettingsRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::BirthwatchPaths;
use crate::error::BirthwatchError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: BirthwatchPaths,
    audit: AuditLogger,
    pub settings: SettingsRepository,
    pub checklist: ChecklistRepository,
}

impl Storage {
    /// Open file-backed storage under `paths`
    pub fn new(paths: BirthwatchPaths) -> Result<Self, BirthwatchError> {
        paths.ensure_directories()?;

        let audit = AuditLogger::new(paths.audit_log());
        let store = JsonFileStore::open(&paths)?;

        Ok(Self {
            settings: SettingsRepository::new(Box::new(store)).with_audit(audit.clone()),
            checklist: ChecklistRepository::new(paths.checklist_file()),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &BirthwatchPaths {
        &self.paths
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Load file-backed data that is not read eagerly
    pub fn load_all(&mut self) -> Result<(), BirthwatchError> {
        self.checklist.load()
    }

    /// Record a change to a non-settings entity
    pub fn log_change<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: Option<&T>,
        after: Option<&T>,
    ) -> Result<(), BirthwatchError> {
        let entry = AuditEntry::change(entity_type, entity_id, entity_name, before, after);
        self.audit.log(&entry)
    }
}
