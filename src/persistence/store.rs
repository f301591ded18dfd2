//! Key-value stores backing the game state.

use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Minimal string key-value capability the engine needs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError>;

    /// Make previous `set` calls durable. No-op for stores that write through.
    fn flush(&mut self) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// In-memory store. Can be switched into a failing mode to exercise save
/// error handling.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail with [`PersistenceError::Unavailable`].
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError> {
        if self.fail_writes {
            return Err(PersistenceError::Unavailable);
        }
        self.entries.insert(key.to_string(), value);
        Ok(())
    }
}

const SAVE_FILE_NAME: &str = "save.json";
const SAVE_FORMAT_VERSION: u32 = 1;

/// On-disk envelope: entries plus a SHA-256 checksum over version and entries.
#[derive(Serialize, Deserialize)]
struct SaveEnvelope {
    version: u32,
    entries: BTreeMap<String, String>,
    checksum: String,
}

fn compute_checksum(version: u32, entries: &BTreeMap<String, String>) -> Result<String, PersistenceError> {
    let body = serde_json::to_vec(entries)?;
    let mut hasher = Sha256::new();
    hasher.update(version.to_le_bytes());
    hasher.update(&body);
    Ok(hasher
        .finalize()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect())
}

/// File-backed store holding every entry in one checksummed JSON file.
///
/// `set` only updates memory; `flush` writes the whole file atomically.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl FileStore {
    /// Open the store in `dir`, creating the directory if needed.
    ///
    /// A missing file gives an empty store. An unreadable or tampered file
    /// is logged and also gives an empty store, so the game starts from
    /// defaults instead of failing.
    pub fn open(dir: &Path) -> Result<Self, PersistenceError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(SAVE_FILE_NAME);

        let entries = if path.exists() {
            match Self::read_entries(&path) {
                Ok(entries) => entries,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "discarding unreadable save file");
                    BTreeMap::new()
                }
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self {
            path,
            entries,
            dirty: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(path: &Path) -> Result<BTreeMap<String, String>, PersistenceError> {
        let json = fs::read_to_string(path)?;
        let envelope: SaveEnvelope = serde_json::from_str(&json)?;

        if envelope.version != SAVE_FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion {
                found: envelope.version,
                expected: SAVE_FORMAT_VERSION,
            });
        }
        if compute_checksum(envelope.version, &envelope.entries)? != envelope.checksum {
            return Err(PersistenceError::Checksum);
        }
        Ok(envelope.entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError> {
        if self.entries.get(key) != Some(&value) {
            self.entries.insert(key.to_string(), value);
            self.dirty = true;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), PersistenceError> {
        if !self.dirty {
            return Ok(());
        }
        let envelope = SaveEnvelope {
            version: SAVE_FORMAT_VERSION,
            checksum: compute_checksum(SAVE_FORMAT_VERSION, &self.entries)?,
            entries: self.entries.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        self.dirty = false;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("sprout-store-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("plantStage"), None);
        store.set("plantStage", "3".to_string()).unwrap();
        assert_eq!(store.get("plantStage"), Some("3".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_memory_store_fail_writes() {
        let mut store = MemoryStore::new();
        store.set_fail_writes(true);
        let result = store.set("plantStage", "3".to_string());
        assert!(matches!(result, Err(PersistenceError::Unavailable)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let dir = scratch_dir("roundtrip");
        {
            let mut store = FileStore::open(&dir).unwrap();
            store.set("totalClicks", "12.5".to_string()).unwrap();
            store.set("plantStage", "2".to_string()).unwrap();
            store.flush().unwrap();
        }
        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("totalClicks"), Some("12.5".to_string()));
        assert_eq!(store.get("plantStage"), Some("2".to_string()));
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_file_store_set_without_flush_is_not_durable() {
        let dir = scratch_dir("noflush");
        {
            let mut store = FileStore::open(&dir).unwrap();
            store.set("plantStage", "2".to_string()).unwrap();
        }
        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("plantStage"), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_tampered_file_opens_empty() {
        let dir = scratch_dir("tampered");
        {
            let mut store = FileStore::open(&dir).unwrap();
            store.set("totalClicks", "10".to_string()).unwrap();
            store.flush().unwrap();
        }
        let path = dir.join(SAVE_FILE_NAME);
        let json = fs::read_to_string(&path).unwrap();
        fs::write(&path, json.replace("\"10\"", "\"99999\"")).unwrap();

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("totalClicks"), None);
        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_garbage_file_opens_empty() {
        let dir = scratch_dir("garbage");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(SAVE_FILE_NAME), "not json at all").unwrap();

        let store = FileStore::open(&dir).unwrap();
        assert_eq!(store.get("plantStage"), None);
        fs::remove_dir_all(&dir).ok();
    }
}
