//! Checklist CLI commands
//!
//! Task numbers are one-based, matching `checklist list`.

use clap::Subcommand;

use crate::display::{format_checklist, format_progress};
use crate::error::{BirthwatchError, BirthwatchResult};
use crate::models::TaskGroup;
use crate::services::ChecklistService;
use crate::storage::Storage;

/// Checklist subcommands
#[derive(Subcommand)]
pub enum ChecklistCommands {
    /// Show all tasks
    List,
    /// Mark a task done, or not done again
    Toggle {
        /// Task number from `checklist list`
        number: usize,
    },
    /// Add a task
    Add {
        label: String,
        /// mother, baby, documents or leaving
        #[arg(short, long, default_value = "mother")]
        group: TaskGroup,
    },
    /// Remove a task
    Remove {
        /// Task number from `checklist list`
        number: usize,
    },
    /// Restore the default list
    Reset,
}

pub fn handle_checklist_command(storage: &Storage, cmd: ChecklistCommands) -> BirthwatchResult<()> {
    let service = ChecklistService::new(storage);

    match cmd {
        ChecklistCommands::List => {
            println!("{}", format_checklist(&service.list()?));
        }
        ChecklistCommands::Toggle { number } => {
            let task = service
                .toggle_task(to_index(number)?)
                .map_err(|e| renumber(e, number))?;
            println!("{}", task);
            println!("{}", format_progress(&service.list()?));
        }
        ChecklistCommands::Add { label, group } => {
            let task = service.add(&label, group)?;
            println!("Added '{}' to {}", task.label, task.group);
        }
        ChecklistCommands::Remove { number } => {
            let task = service
                .remove(to_index(number)?)
                .map_err(|e| renumber(e, number))?;
            println!("Removed '{}'", task.label);
        }
        ChecklistCommands::Reset => {
            let tasks = service.reset()?;
            println!("Checklist reset to {} default tasks.", tasks.len());
        }
    }

    Ok(())
}

fn to_index(number: usize) -> BirthwatchResult<usize> {
    number
        .checked_sub(1)
        .ok_or_else(|| BirthwatchError::task_not_found(format!("#{}", number)))
}

/// Report missing tasks by the number the user typed
fn renumber(err: BirthwatchError, number: usize) -> BirthwatchError {
    if err.is_not_found() {
        BirthwatchError::task_not_found(format!("#{}", number))
    } else {
        err
    }
}
