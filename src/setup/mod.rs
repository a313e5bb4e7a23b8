//! First-run setup wizard
//!
//! Provides an interactive setup experience that collects the due date,
//! the hospital, emergency contacts and childcare arrangements.

pub mod steps;
pub mod wizard;

pub use wizard::{Prompter, SetupResult, SetupWizard};
