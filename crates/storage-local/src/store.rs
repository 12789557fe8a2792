//! The on-disk key-value blob store.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::debug;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::StorageError;

/// Blob key holding the trade ledger.
pub const TRADES_STORE_KEY: &str = "trades";

/// Blob key holding the favorites list.
pub const FAVORITES_STORE_KEY: &str = "favorites";

const STORE_FILE: &str = "store.json";
const APP_DIR: &str = "coinstack";

/// A file-backed key-value store of opaque string blobs.
///
/// One JSON document maps keys to string values; collection blobs are
/// JSON arrays encoded into those strings, settings are raw strings.
/// Every mutation rewrites the document through a temp-file-then-rename
/// so a crash mid-write never leaves a torn store.
///
/// The store has a single logical writer (mutations happen one user
/// action at a time); the interior lock exists for `Send + Sync`
/// soundness, not for coordination.
pub struct LocalStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl LocalStore {
    /// Open (or create) the store at the given path.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(
            "Opened local store at {} with {} keys",
            path.display(),
            entries.len()
        );
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Open the store at the platform data directory
    /// (`<data_dir>/coinstack/store.json`), creating it as needed.
    pub fn open_default() -> Result<Self, StorageError> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| StorageError::Unavailable("no platform data directory".to_string()))?
            .join(APP_DIR);
        fs::create_dir_all(&data_dir)?;
        Self::open(data_dir.join(STORE_FILE))
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Raw string value under a key.
    pub fn get_item(&self, key: &str) -> Option<String> {
        self.read().get(key).cloned()
    }

    /// Store a raw string value and write through to disk.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    /// Remove a key, returning its previous value if any.
    pub fn remove_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut entries = self.write();
        let previous = entries.remove(key);
        if previous.is_some() {
            self.persist(&entries)?;
        }
        Ok(previous)
    }

    /// Decode the JSON blob under a key. Absent key yields `None`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.read().get(key) {
            Some(blob) => Ok(Some(serde_json::from_str(blob)?)),
            None => Ok(None),
        }
    }

    /// Encode a value to JSON and store it under a key.
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let blob = serde_json::to_string(value)?;
        self.set_item(key, &blob)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        let document = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, document)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}
