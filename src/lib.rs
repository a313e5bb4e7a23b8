//! Birthwatch - terminal companion for the last weeks of pregnancy
//!
//! This library provides the core functionality for the Birthwatch
//! application: a labor timer that escalates warnings as time passes since
//! the waters broke, a first-run setup wizard, the hospital bag checklist,
//! emergency contacts with dialing, and due-date tracking.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (elapsed time, wizard steps, tasks, contacts)
//! - `storage`: Key-value settings store and JSON file storage
//! - `services`: Business logic layer (timer monitor, wizard flow, ...)
//! - `audit`: Audit logging system
//! - `launch`: Hand-off to the system dialer
//! - `setup`: Interactive first-run wizard
//! - `cli`, `display`, `tui`: Terminal front ends
//!
//! # Example
//!
//! ```rust,ignore
//! use birthwatch::services::ElapsedTimeMonitor;
//!
//! let monitor = ElapsedTimeMonitor::new(water_broke_at_ms);
//! let reading = monitor.poll(now_ms);
//! println!("{} ({})", reading.elapsed, reading.level);
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod launch;
pub mod models;
pub mod services;
pub mod setup;
pub mod storage;
pub mod tui;

pub use error::BirthwatchError;
