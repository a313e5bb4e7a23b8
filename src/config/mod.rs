//! Configuration module for Birthwatch
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BirthwatchPaths;
pub use settings::{HospitalPreset, Settings};
