//! Checklist task model
//!
//! Tasks are the packing list and the things to do before leaving for the
//! hospital, grouped for display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TaskId;

/// Maximum label length accepted for a task
pub const MAX_LABEL_LEN: usize = 120;

/// Display grouping for tasks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskGroup {
    #[default]
    ForMother,
    ForBaby,
    Documents,
    BeforeLeaving,
}

impl TaskGroup {
    pub const ALL: [TaskGroup; 4] = [
        TaskGroup::ForMother,
        TaskGroup::ForBaby,
        TaskGroup::Documents,
        TaskGroup::BeforeLeaving,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TaskGroup::ForMother => "For Mother",
            TaskGroup::ForBaby => "For Baby",
            TaskGroup::Documents => "Documents",
            TaskGroup::BeforeLeaving => "Before Leaving",
        }
    }

    /// Items a fresh install starts with
    fn default_labels(self) -> &'static [&'static str] {
        match self {
            TaskGroup::ForMother => &[
                "Nightgown and robe",
                "Slippers",
                "Toiletries",
                "Nursing bras",
                "Phone charger",
            ],
            TaskGroup::ForBaby => &[
                "Going-home outfit",
                "Diapers",
                "Blanket",
                "Car seat installed",
            ],
            TaskGroup::Documents => &[
                "ID card",
                "Insurance card",
                "Prenatal records",
                "Birth plan",
            ],
            TaskGroup::BeforeLeaving => &[
                "Arrange care for the children",
                "Note the time the waters broke",
                "Call the hospital",
            ],
        }
    }
}

impl fmt::Display for TaskGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for TaskGroup {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "mother" | "for_mother" => Ok(TaskGroup::ForMother),
            "baby" | "for_baby" => Ok(TaskGroup::ForBaby),
            "documents" | "docs" => Ok(TaskGroup::Documents),
            "leaving" | "before_leaving" => Ok(TaskGroup::BeforeLeaving),
            _ => Err(format!(
                "Unknown group '{}'. Expected one of: mother, baby, documents, leaving",
                s
            )),
        }
    }
}

/// A single checklist entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub label: String,
    #[serde(default)]
    pub group: TaskGroup,
    #[serde(default)]
    pub done: bool,
}

impl Task {
    pub fn new(label: impl Into<String>, group: TaskGroup) -> Self {
        Self {
            id: TaskId::new(),
            label: label.into(),
            group,
            done: false,
        }
    }

    /// The list a fresh install is seeded with
    pub fn defaults() -> Vec<Task> {
        TaskGroup::ALL
            .iter()
            .flat_map(|group| {
                group
                    .default_labels()
                    .iter()
                    .map(move |label| Task::new(*label, *group))
            })
            .collect()
    }

    pub fn toggle(&mut self) {
        self.done = !self.done;
    }

    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.label.trim().is_empty() {
            return Err(TaskValidationError::EmptyLabel);
        }

        if self.label.len() > MAX_LABEL_LEN {
            return Err(TaskValidationError::LabelTooLong(self.label.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { "x" } else { " " };
        write!(f, "[{}] {}", mark, self.label)
    }
}

/// Validation errors for tasks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyLabel,
    LabelTooLong(usize),
}

impl fmt::Display for TaskValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "Task label cannot be empty"),
            Self::LabelTooLong(len) => {
                write!(f, "Task label too long ({} chars, max {})", len, MAX_LABEL_LEN)
            }
        }
    }
}

impl std::error::Error for TaskValidationError {}
