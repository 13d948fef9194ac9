//! Layout persistence
//!
//! A group's size vector is stored under its persistence key as a JSON array
//! of `{ "size": f64 }` objects, in panel order. Stores only move strings;
//! validation against the group happens in `PanelGroup::restore`.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use tempfile::NamedTempFile;

use crate::error::LayoutRejection;

/// One entry of a persisted layout record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersistedPanel {
    pub size: f64,
}

/// Serialize a size vector into the persisted record format
pub fn encode_sizes(sizes: &[f64]) -> String {
    let record: Vec<PersistedPanel> = sizes.iter().map(|&size| PersistedPanel { size }).collect();
    // A Vec of plain structs with finite floats always serializes
    serde_json::to_string(&record).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a persisted record back into sizes
pub fn decode_sizes(contents: &str) -> Result<Vec<f64>, LayoutRejection> {
    let record: Vec<PersistedPanel> =
        serde_json::from_str(contents).map_err(|e| LayoutRejection::Corrupt(e.to_string()))?;
    Ok(record.into_iter().map(|panel| panel.size).collect())
}

/// Storage backend for layout records, supplied by the host
///
/// Writes happen on a background thread, hence `Send + Sync`.
pub trait LayoutStore: Send + Sync {
    /// Read the record for `key`, `Ok(None)` if there is none
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    /// Replace the record for `key`
    fn save(&self, key: &str, contents: &str) -> io::Result<()>;
}

/// Stores each record as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    dir: PathBuf,
}

impl FileLayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under the shell's state directory
    pub fn in_state_dir() -> Option<Self> {
        crate::config_paths::layouts_dir().map(Self::new)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File for a key; characters outside `[A-Za-z0-9_-]` become `_`
    pub fn path_for(&self, key: &str) -> PathBuf {
        let file_stem: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{}.json", file_stem))
    }
}

impl LayoutStore for FileLayoutStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, key: &str, contents: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        // Uniquely named sibling, renamed over the record once complete
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(contents.as_bytes())?;
        tmp.persist(self.path_for(key)).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Keeps records in memory, for hosts without disk access
#[derive(Debug)]
pub struct MemoryLayoutStore {
    records: Mutex<HashMap<String, String>>,
    available: AtomicBool,
}

impl Default for MemoryLayoutStore {
    fn default() -> Self {
        Self {
            records: Mutex::new(HashMap::new()),
            available: AtomicBool::new(true),
        }
    }
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a record, e.g. to restore state captured elsewhere
    pub fn insert(&self, key: impl Into<String>, contents: impl Into<String>) {
        self.records.lock().insert(key.into(), contents.into());
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.records.lock().get(key).cloned()
    }

    /// Toggle availability; while unavailable every load and save fails
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn check_available(&self) -> io::Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(io::Error::other("layout storage unavailable"))
        }
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        self.check_available()?;
        Ok(self.get(key))
    }

    fn save(&self, key: &str, contents: &str) -> io::Result<()> {
        self.check_available()?;
        self.insert(key, contents);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_matches_record_format() {
        assert_eq!(
            encode_sizes(&[20.0, 60.0, 20.0]),
            r#"[{"size":20.0},{"size":60.0},{"size":20.0}]"#
        );
    }

    #[test]
    fn test_decode_accepts_integers_and_extra_fields() {
        let sizes = decode_sizes(r#"[{"size":25},{"size":75.0,"collapsed":false}]"#).unwrap();
        assert_eq!(sizes, vec![25.0, 75.0]);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(matches!(
            decode_sizes("{not json"),
            Err(LayoutRejection::Corrupt(_))
        ));
        assert!(matches!(
            decode_sizes(r#"{"size": 20}"#),
            Err(LayoutRejection::Corrupt(_))
        ));
    }

    #[test]
    fn test_path_for_sanitizes_key() {
        let store = FileLayoutStore::new("/tmp/layouts");
        assert_eq!(
            store.path_for("dashboard/main v2"),
            PathBuf::from("/tmp/layouts/dashboard_main_v2.json")
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLayoutStore::new(dir.path().join("layouts"));

        assert_eq!(store.load("dashboard").unwrap(), None);
        store.save("dashboard", "[]").unwrap();
        assert_eq!(store.load("dashboard").unwrap(), Some("[]".to_string()));

        store.save("dashboard", r#"[{"size":100.0}]"#).unwrap();
        assert_eq!(
            store.load("dashboard").unwrap().as_deref(),
            Some(r#"[{"size":100.0}]"#)
        );
        // No temporary files left next to the record
        let entries = std::fs::read_dir(store.dir()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_memory_store_unavailable() {
        let store = MemoryLayoutStore::new();
        store.set_available(false);
        assert!(store.save("dashboard", "[]").is_err());
        assert!(store.load("dashboard").is_err());
        store.set_available(true);
        assert!(store.save("dashboard", "[]").is_ok());
        assert_eq!(store.get("dashboard"), Some("[]".to_string()));
    }
}
