//! Display formatting for terminal output
//!
//! Provides utilities for formatting the timer, checklist, contacts and due
//! date for plain terminal output.

pub mod checklist;
pub mod contacts;
pub mod due;
pub mod timer;

pub use checklist::{format_checklist, format_progress};
pub use contacts::format_contact_list;
pub use due::format_due_status;
pub use timer::{format_timer, level_marker};
