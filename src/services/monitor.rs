//! Elapsed-time monitor for the labor timer
//!
//! Measures the time since the waters broke and classifies it into a
//! `WarningLevel`. The monitor holds only the reference instant; every poll is
//! a pure function of `(reference, now)`.

use chrono::{DateTime, Utc};

use crate::error::BirthwatchResult;
use crate::models::{Elapsed, Reading, WarningLevel};
use crate::storage::SettingsRepository;

use super::clock::Clock;

/// Computes elapsed time and warning level against a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedTimeMonitor {
    reference_ms: i64,
}

impl ElapsedTimeMonitor {
    pub fn new(reference_ms: i64) -> Self {
        Self { reference_ms }
    }

    pub fn from_datetime(reference: DateTime<Utc>) -> Self {
        Self::new(reference.timestamp_millis())
    }

    /// Monitor for the stored labor start, or `None` if it was never recorded
    pub fn from_settings(settings: &SettingsRepository) -> BirthwatchResult<Option<Self>> {
        Ok(settings.water_broke_at()?.map(Self::new))
    }

    pub fn reference_ms(&self) -> i64 {
        self.reference_ms
    }

    /// The reference instant, if it is within chrono's representable range
    pub fn reference_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.reference_ms)
    }

    /// Elapsed time and warning level at `now_ms`
    ///
    /// Before the reference instant the timer reads zero with no warning.
    pub fn poll(&self, now_ms: i64) -> Reading {
        if now_ms < self.reference_ms {
            return Reading {
                elapsed: Elapsed::not_started(),
                level: WarningLevel::None,
            };
        }

        let elapsed = Elapsed::from_millis(now_ms.abs_diff(self.reference_ms));
        Reading {
            elapsed,
            level: WarningLevel::from_hours(elapsed.hours),
        }
    }

    pub fn poll_clock(&self, clock: &dyn Clock) -> Reading {
        self.poll(clock.now_ms())
    }
}
