//! Storage initialization
//!
//! Seeds a fresh installation with the default packing list.

use crate::config::paths::BirthwatchPaths;
use crate::error::BirthwatchError;
use crate::models::Task;

use super::file_io::write_json_atomic;

/// Initialize storage for a fresh installation
///
/// Never overwrites an existing checklist.
pub fn initialize_storage(paths: &BirthwatchPaths) -> Result<(), BirthwatchError> {
    paths.ensure_directories()?;

    if needs_initialization(paths) {
        let data = serde_json::json!({ "tasks": Task::defaults() });
        write_json_atomic(paths.checklist_file(), &data)?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &BirthwatchPaths) -> bool {
    !paths.checklist_file().exists()
}
