//! JSON-file backed settings store
//!
//! Each namespace lives in `data/<namespace>.json`. All namespaces are loaded
//! at construction; every mutation rewrites its namespace file atomically and
//! only reaches memory once the file is written.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::config::paths::BirthwatchPaths;
use crate::error::{BirthwatchError, BirthwatchResult};

use super::file_io::{read_json, write_json_atomic};
use super::kv::{KeyValueStore, Namespace, NamespaceData, Value};

/// Settings store persisted as one JSON file per namespace
pub struct JsonFileStore {
    files: HashMap<Namespace, PathBuf>,
    data: RwLock<HashMap<Namespace, NamespaceData>>,
}

impl JsonFileStore {
    /// Open the store, loading every namespace file that exists
    pub fn open(paths: &BirthwatchPaths) -> BirthwatchResult<Self> {
        let files: HashMap<Namespace, PathBuf> = Namespace::ALL
            .iter()
            .map(|ns| (*ns, paths.namespace_file(*ns)))
            .collect();

        let store = Self {
            files,
            data: RwLock::new(HashMap::new()),
        };
        store.load()?;
        Ok(store)
    }

    /// Reload every namespace from disk
    pub fn load(&self) -> BirthwatchResult<()> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for (namespace, path) in &self.files {
            let contents: NamespaceData = read_json(path)?;
            data.insert(*namespace, contents);
        }

        Ok(())
    }

    fn persist(&self, namespace: Namespace, contents: &NamespaceData) -> BirthwatchResult<()> {
        let path = self.files.get(&namespace).ok_or_else(|| {
            BirthwatchError::Storage(format!("No file configured for namespace {}", namespace))
        })?;
        write_json_atomic(path, contents)
    }
}

impl KeyValueStore for JsonFileStore {
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

        let mut contents = data.get(&namespace).cloned().unwrap_or_default();
        contents.insert(key.to_string(), value);
        self.persist(namespace, &contents)?;
        data.insert(namespace, contents);
        Ok(())
    }

    fn remove(&self, namespace: Namespace, key: &str) -> BirthwatchResult<Option<Value>> {
        let mut data = self.data.write().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let Some(current) = data.get(&namespace) else {
            return Ok(None);
        };
        if !current.contains_key(key) {
            return Ok(None);
        }

        let mut contents = current.clone();
        let previous = contents.remove(key);
        self.persist(namespace, &contents)?;
        data.insert(namespace, contents);
        Ok(previous)
    }

    fn entries(&self, namespace: Namespace) -> BirthwatchResult<NamespaceData> {
        let data = self.data.read().map_err(|e| {
            BirthwatchError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.get(&namespace).cloned().unwrap_or_default())
    }
}
