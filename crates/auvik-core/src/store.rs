// ── JSON file store ──
//
// Thin typed wrapper over the data directory. Callers address files by
// relative path; parent directories appear on demand.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::CoreError;

/// Reads and writes JSON documents under a root directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_of(&self, rel: &str) -> PathBuf {
        self.root.join(rel)
    }

    /// Reads and decodes a document. A missing file is `Ok(None)`; a file
    /// that exists but will not decode is an error, so callers decide
    /// whether that is fatal.
    pub fn read<T: DeserializeOwned>(&self, rel: &str) -> Result<Option<T>, CoreError> {
        let path = self.path_of(rel);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(CoreError::Store { path, source }),
        };
        let value = serde_json::from_str(&raw)
            .map_err(|source| CoreError::StoreEncoding { path, source })?;
        Ok(Some(value))
    }

    /// Encodes and writes a document, creating parent directories.
    pub fn write<T: Serialize>(&self, rel: &str, value: &T) -> Result<(), CoreError> {
        self.write_raw(rel, serde_json::to_string(value))
    }

    /// Like [`write`](Self::write), but pretty-printed for artifacts a
    /// human will open.
    pub fn write_pretty<T: Serialize>(&self, rel: &str, value: &T) -> Result<(), CoreError> {
        self.write_raw(rel, serde_json::to_string_pretty(value))
    }

    fn write_raw(
        &self,
        rel: &str,
        encoded: Result<String, serde_json::Error>,
    ) -> Result<(), CoreError> {
        let path = self.path_of(rel);
        let raw = encoded.map_err(|source| CoreError::StoreEncoding {
            path: path.clone(),
            source,
        })?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| CoreError::Store {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, raw).map_err(|source| CoreError::Store { path, source })
    }

    /// Removes one file. `Ok(false)` when it was not there.
    pub fn remove(&self, rel: &str) -> Result<bool, CoreError> {
        let path = self.path_of(rel);
        match fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CoreError::Store { path, source }),
        }
    }

    /// Removes a subtree. `Ok(false)` when it was not there.
    pub fn remove_tree(&self, rel: &str) -> Result<bool, CoreError> {
        let path = self.path_of(rel);
        match fs::remove_dir_all(&path) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(source) => Err(CoreError::Store { path, source }),
        }
    }

    #[must_use]
    pub fn exists(&self, rel: &str) -> bool {
        self.path_of(rel).exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        value: u32,
    }

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.write("nested/dir/doc.json", &Doc { value: 7 }).unwrap();
        let loaded: Option<Doc> = store.read("nested/dir/doc.json").unwrap();
        assert_eq!(loaded, Some(Doc { value: 7 }));
    }

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        let loaded: Option<Doc> = store.read("absent.json").unwrap();
        assert_eq!(loaded, None);
    }

    #[test]
    fn malformed_file_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{not json").unwrap();
        let store = JsonStore::new(dir.path());
        let result: Result<Option<Doc>, _> = store.read("bad.json");
        assert!(matches!(result, Err(CoreError::StoreEncoding { .. })));
    }

    #[test]
    fn remove_reports_whether_anything_was_there() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());
        store.write("doc.json", &Doc { value: 1 }).unwrap();
        assert!(store.remove("doc.json").unwrap());
        assert!(!store.remove("doc.json").unwrap());
        assert!(!store.remove_tree("nothing").unwrap());
    }
}
