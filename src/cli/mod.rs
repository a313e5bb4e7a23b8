//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod checklist;
pub mod contacts;
pub mod due;
pub mod timer;

pub use checklist::{handle_checklist_command, ChecklistCommands};
pub use contacts::{handle_contact_command, ContactCommands};
pub use due::{handle_due_command, DueCommands};
pub use timer::{handle_timer_command, parse_instant, TimerCommands};
