//! Due-date arithmetic
//!
//! Uses Naegele's rule: the due date is 280 days after the first day of the
//! last menstrual period (LMP), and gestational age counts from the LMP.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a full-term pregnancy counted from the LMP
pub const TERM_DAYS: i64 = 280;

/// Weeks and days of pregnancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GestationalAge {
    pub weeks: u32,
    pub days: u32,
}

impl GestationalAge {
    fn from_days(days: i64) -> Self {
        let days = days.max(0) as u32;
        Self {
            weeks: days / 7,
            days: days % 7,
        }
    }
}

impl fmt::Display for GestationalAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}w{}d", self.weeks, self.days)
    }
}

/// A pregnancy identified by its due date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pregnancy {
    pub due_date: NaiveDate,
}

impl Pregnancy {
    pub fn new(due_date: NaiveDate) -> Self {
        Self { due_date }
    }

    /// Derive the due date from the first day of the last period
    pub fn from_lmp(lmp: NaiveDate) -> Self {
        Self {
            due_date: lmp + Duration::days(TERM_DAYS),
        }
    }

    /// First day of the last period implied by the due date
    pub fn lmp(&self) -> NaiveDate {
        self.due_date - Duration::days(TERM_DAYS)
    }

    /// Gestational age on `today`; zero before the LMP
    pub fn gestational_age(&self, today: NaiveDate) -> GestationalAge {
        GestationalAge::from_days((today - self.lmp()).num_days())
    }

    /// Days until the due date; negative once overdue
    pub fn days_remaining(&self, today: NaiveDate) -> i64 {
        (self.due_date - today).num_days()
    }

    /// Trimester (1-3) on `today`
    pub fn trimester(&self, today: NaiveDate) -> u8 {
        match self.gestational_age(today).weeks {
            0..=12 => 1,
            13..=26 => 2,
            _ => 3,
        }
    }
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}
