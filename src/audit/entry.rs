//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of changes that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A value was set where none existed
    Create,
    /// An existing value was replaced
    Update,
    /// A value was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "SET"),
            Operation::Update => write!(f, "CHANGE"),
            Operation::Delete => write!(f, "CLEAR"),
        }
    }
}

/// What kind of thing changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    /// A key in one of the settings namespaces
    Setting,
    /// A checklist task
    Task,
    /// The wizard completion gate
    Wizard,
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityType::Setting => write!(f, "Setting"),
            EntityType::Task => write!(f, "Task"),
            EntityType::Wizard => write!(f, "Wizard"),
        }
    }
}

/// A single audit log line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub entity_type: EntityType,

    /// `namespace/key` for settings, task ID for tasks
    pub entity_id: String,

    /// Human-readable label (task label, contact name)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Build an entry from the value before and after a change
    ///
    /// The operation is inferred: nothing before is a create, nothing after
    /// is a delete, anything else is an update.
    pub fn change<T: Serialize>(
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        before: Option<&T>,
        after: Option<&T>,
    ) -> Self {
        let operation = match (before.is_some(), after.is_some()) {
            (false, _) => Operation::Create,
            (true, false) => Operation::Delete,
            (true, true) => Operation::Update,
        };

        Self {
            timestamp: Utc::now(),
            operation,
            entity_type,
            entity_id: entity_id.into(),
            entity_name,
            before: before.and_then(|v| serde_json::to_value(v).ok()),
            after: after.and_then(|v| serde_json::to_value(v).ok()),
        }
    }

    /// One-line summary of the change, e.g. `"12345" -> "67890"`
    pub fn summary(&self) -> String {
        let show = |v: &Option<serde_json::Value>| {
            v.as_ref()
                .map(|v| v.to_string())
                .unwrap_or_else(|| "(unset)".to_string())
        };
        format!("{} -> {}", show(&self.before), show(&self.after))
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.entity_type,
            self.entity_id
        );

        if let Some(name) = &self.entity_name {
            output.push_str(&format!(" ({})", name));
        }

        output.push_str(&format!("\n  {}", self.summary()));
        output
    }
}
