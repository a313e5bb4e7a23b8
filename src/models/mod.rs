//! Core data models for Birthwatch
//!
//! This module contains the data structures of the domain: elapsed-time
//! readings, wizard steps, emergency contacts, checklist tasks and due-date
//! arithmetic.

pub mod contact;
pub mod elapsed;
pub mod ids;
pub mod pregnancy;
pub mod task;
pub mod wizard;

pub use contact::{ContactRole, EmergencyContact};
pub use elapsed::{Elapsed, Reading, WarningLevel};
pub use ids::TaskId;
pub use pregnancy::{GestationalAge, Pregnancy};
pub use task::{Task, TaskGroup};
pub use wizard::{StepData, StepField, WizardStep, TOTAL_STEPS};
