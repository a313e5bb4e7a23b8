//! Namespaced key-value settings store
//!
//! Settings are grouped into a few namespaces, each a flat map from key to a
//! string, long or boolean value. Absent keys read as unset; a value of the
//! wrong type also reads as unset.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::{BirthwatchError, BirthwatchResult};

/// A logical group of persisted keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Namespace {
    /// Due date and the labor start instant
    General,
    /// Emergency contact names and phone numbers
    Contacts,
    /// Notes about who looks after the children
    Children,
    /// The wizard completion flag
    Wizard,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::General,
        Namespace::Contacts,
        Namespace::Children,
        Namespace::Wizard,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::General => "general",
            Namespace::Contacts => "contacts",
            Namespace::Children => "children",
            Namespace::Wizard => "wizard",
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A stored value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Long(i64),
    Text(String),
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

/// Contents of one namespace
pub type NamespaceData = BTreeMap<String, Value>;

/// Storage backend for settings
///
/// Implementations persist on every `set`/`remove`; access is user-paced so
/// there is no batching.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<Value>>;

    fn set(&self, namespace: Namespace, key: &str, value: Value) -> BirthwatchResult<()>;

    /// Remove a key, returning the previous value
    fn remove(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<Value>>;

    /// Snapshot of a whole namespace
    fn entries(&self, namespace: Namespace) -> BirthwatchResult<NamespaceData>;

    fn get_string(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<String>> {
        Ok(match self.get(namespace, key)? {
            Some(Value::Text(s)) => Some(s),
            _ => None,
        })
    }

    fn get_long(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<i64>> {
        Ok(match self.get(namespace, key)? {
            Some(Value::Long(n)) => Some(n),
            _ => None,
        })
    }

    fn get_bool(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<bool>> {
        Ok(match self.get(namespace, key)? {
            Some(Value::Bool(b)) => Some(b),
            _ => None,
        })
    }
}

/// In-memory store, for tests and dry runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<HashMap<Namespace, NamespaceData>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<Value>> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(&namespace).and_then(|ns| ns.get(key)).cloned())
    }

    fn set(&self, namespace: Namespace, key: &str, value: Value) -> BirthwatchResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        data.entry(namespace).or_default().insert(key.to_string(), value);
        Ok(())
    }

    fn remove(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<Value>> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.get_mut(&namespace).and_then(|ns| ns.remove(key)))
    }

    fn entries(&self, namespace: Namespace) -> BirthwatchResult<NamespaceData> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(&namespace).cloned().unwrap_or_default())
    }
}
