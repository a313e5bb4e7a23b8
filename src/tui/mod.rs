//! Terminal User Interface module
//!
//! This module provides the interactive TUI for Birthwatch using ratatui:
//! a live labor timer, the checklist, and the contact list with dialing.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;

pub use app::App;
pub use terminal::run_tui;
