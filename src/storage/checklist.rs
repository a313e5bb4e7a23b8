//! Checklist repository for JSON storage
//!
//! Manages loading and saving tasks to checklist.json. Order is significant:
//! tasks are addressed by position.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{BirthwatchError, BirthwatchResult};
use crate::models::Task;

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ChecklistData {
    tasks: Vec<Task>,
}

/// Repository for checklist persistence
pub struct ChecklistRepository {
    path: PathBuf,
    data: RwLock<Vec<Task>>,
}

impl ChecklistRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load tasks from disk
    pub fn load(&self) -> BirthwatchResult<()> {
        let file_data: ChecklistData = read_json(&self.path)?;
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = file_data.tasks;
        Ok(())
    }

    /// Save tasks to disk
    pub fn save(&self) -> BirthwatchResult<()> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        let file_data = ChecklistData {
            tasks: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    pub fn get_all(&self) -> BirthwatchResult<Vec<Task>> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.clone())
    }

    pub fn get(&self, index: usize) -> BirthwatchResult<Option<Task>> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(index).cloned())
    }

    /// Apply `f` to the task at `index`, returning the updated task
    pub fn update<F>(&self, index: usize, f: F) -> BirthwatchResult<Option<Task>>
    where
        F: FnOnce(&mut Task),
    {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.get_mut(index).map(|task| {
            f(task);
            task.clone()
        }))
    }

    pub fn push(&self, task: Task) -> BirthwatchResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.push(task);
        Ok(())
    }

    pub fn remove(&self, index: usize) -> BirthwatchResult<Option<Task>> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        if index < data.len() {
            Ok(Some(data.remove(index)))
        } else {
            Ok(None)
        }
    }

    pub fn replace_all(&self, tasks: Vec<Task>) -> BirthwatchResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        *data = tasks;
        Ok(())
    }

    pub fn count(&self) -> BirthwatchResult<usize> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
