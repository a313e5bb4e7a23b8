//! Checklist service
//!
//! Provides the packing list and pre-departure tasks. Tasks are addressed by
//! their position in the list, as shown by `checklist list`.

use crate::audit::EntityType;
use crate::error::{BirthwatchError, BirthwatchResult};
use crate::models::{Task, TaskGroup};
use crate::storage::Storage;

/// Service for checklist management
pub struct ChecklistService<'a> {
    storage: &'a Storage,
}

impl<'a> ChecklistService<'a> {
    /// Create a new checklist service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// All tasks in list order
    pub fn list(&self) -> BirthwatchResult<Vec<Task>> {
        self.storage.checklist.get_all()
    }

    /// Tasks belonging to one group, paired with their list index
    pub fn list_group(&self, group: TaskGroup) -> BirthwatchResult<Vec<(usize, Task)>> {
        Ok(self
            .list()?
            .into_iter()
            .enumerate()
            .filter(|(_, task)| task.group == group)
            .collect())
    }

    /// Flip the done flag of the task at `index`
    pub fn toggle_task(&self, index: usize) -> BirthwatchResult<Task> {
        let before = self
            .storage
            .checklist
            .get(index)?
            .ok_or_else(|| BirthwatchError::task_not_found(index.to_string()))?;

        let after = self
            .storage
            .checklist
            .update(index, Task::toggle)?
            .ok_or_else(|| BirthwatchError::task_not_found(index.to_string()))?;
        self.storage.checklist.save()?;

        self.storage.log_change(
            EntityType::Task,
            after.id.to_string(),
            Some(after.label.clone()),
            Some(&before.done),
            Some(&after.done),
        )?;

        Ok(after)
    }

    /// Append a task
    pub fn add(&self, label: &str, group: TaskGroup) -> BirthwatchResult<Task> {
        let task = Task::new(label.trim(), group);
        task.validate()
            .map_err(|e| BirthwatchError::Validation(e.to_string()))?;

        self.storage.checklist.push(task.clone())?;
        self.storage.checklist.save()?;

        self.storage.log_change(
            EntityType::Task,
            task.id.to_string(),
            Some(task.label.clone()),
            None,
            Some(&task),
        )?;

        Ok(task)
    }

    /// Remove the task at `index`
    pub fn remove(&self, index: usize) -> BirthwatchResult<Task> {
        let task = self
            .storage
            .checklist
            .remove(index)?
            .ok_or_else(|| BirthwatchError::task_not_found(index.to_string()))?;
        self.storage.checklist.save()?;

        self.storage.log_change(
            EntityType::Task,
            task.id.to_string(),
            Some(task.label.clone()),
            Some(&task),
            None,
        )?;

        Ok(task)
    }

    /// Restore the default list, dropping custom tasks and progress
    pub fn reset(&self) -> BirthwatchResult<Vec<Task>> {
        let tasks = Task::defaults();
        self.storage.checklist.replace_all(tasks.clone())?;
        self.storage.checklist.save()?;

        self.storage.log_change::<usize>(
            EntityType::Task,
            "checklist",
            Some("reset".to_string()),
            None,
            Some(&tasks.len()),
        )?;

        Ok(tasks)
    }

    /// `(done, total)`
    pub fn progress(&self) -> BirthwatchResult<(usize, usize)> {
        let tasks = self.list()?;
        let done = tasks.iter().filter(|t| t.done).count();
        Ok((done, tasks.len()))
    }
}
