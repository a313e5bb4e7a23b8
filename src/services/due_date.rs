//! Due date service

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::BirthwatchResult;
use crate::models::{GestationalAge, Pregnancy};
use crate::storage::Storage;

/// Where the pregnancy stands on a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DueDateStatus {
    pub due_date: NaiveDate,
    pub gestational_age: GestationalAge,
    /// Negative once overdue
    pub days_remaining: i64,
    pub trimester: u8,
}

pub struct DueDateService<'a> {
    storage: &'a Storage,
}

impl<'a> DueDateService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    pub fn due_date(&self) -> BirthwatchResult<Option<NaiveDate>> {
        self.storage.settings.due_date()
    }

    pub fn set_due_date(&self, date: NaiveDate) -> BirthwatchResult<NaiveDate> {
        self.storage.settings.set_due_date(date)?;
        Ok(date)
    }

    /// Store the due date derived from the first day of the last period
    pub fn set_from_lmp(&self, lmp: NaiveDate) -> BirthwatchResult<NaiveDate> {
        self.set_due_date(Pregnancy::from_lmp(lmp).due_date)
    }

    /// Status on `today`, or `None` if no due date is stored
    pub fn status(&self, today: NaiveDate) -> BirthwatchResult<Option<DueDateStatus>> {
        Ok(self.due_date()?.map(|due_date| {
            let pregnancy = Pregnancy::new(due_date);
            DueDateStatus {
                due_date,
                gestational_age: pregnancy.gestational_age(today),
                days_remaining: pregnancy.days_remaining(today),
                trimester: pregnancy.trimester(today),
            }
        }))
    }
}
