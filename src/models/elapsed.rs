//! Elapsed-time values produced by the labor timer
//!
//! ## Warning Levels
//!
//! - **None**: less than 18 hours since the waters broke
//! - **Elevated**: 18 hours up to (not including) 24 hours
//! - **Critical**: 24 hours or more
//!
//! A boundary instant belongs to the higher tier: exactly 18:00:00 is
//! `Elevated`, exactly 24:00:00 is `Critical`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hours after which the warning becomes `Elevated`
pub const ELEVATED_AFTER_HOURS: u64 = 18;

/// Hours after which the warning becomes `Critical`
pub const CRITICAL_AFTER_HOURS: u64 = 24;

/// Risk classification derived from elapsed hours
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum WarningLevel {
    #[default]
    None,
    Elevated,
    Critical,
}

impl WarningLevel {
    /// Classify a number of whole elapsed hours
    pub fn from_hours(hours: u64) -> Self {
        if hours >= CRITICAL_AFTER_HOURS {
            WarningLevel::Critical
        } else if hours >= ELEVATED_AFTER_HOURS {
            WarningLevel::Elevated
        } else {
            WarningLevel::None
        }
    }

    /// Short advice line shown next to the timer
    pub fn advice(self) -> &'static str {
        match self {
            WarningLevel::None => "Within the usual window",
            WarningLevel::Elevated => "Over 18 hours: call the hospital",
            WarningLevel::Critical => "Over 24 hours: go to the hospital now",
        }
    }
}

impl fmt::Display for WarningLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningLevel::None => write!(f, "none"),
            WarningLevel::Elevated => write!(f, "elevated"),
            WarningLevel::Critical => write!(f, "critical"),
        }
    }
}

/// Time since the reference instant, in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Elapsed {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    /// False when "now" is still before the reference instant
    pub started: bool,
}

impl Elapsed {
    /// The value reported before the reference instant
    pub fn not_started() -> Self {
        Self::default()
    }

    /// Split a millisecond count into whole hours, minutes and seconds
    pub fn from_millis(millis: u64) -> Self {
        let total_seconds = millis / 1000;
        Self {
            hours: total_seconds / 3600,
            minutes: ((total_seconds % 3600) / 60) as u8,
            seconds: (total_seconds % 60) as u8,
            started: true,
        }
    }

    /// Total whole seconds represented
    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// One poll of the labor timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reading {
    pub elapsed: Elapsed,
    pub level: WarningLevel,
}
