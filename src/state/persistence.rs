// Repertoire persistence module
// Handles reading and rewriting the JSON file backing the song collection

use super::app_state::Song;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// File-backed store for the song repertoire.
///
/// The file holds the entire collection as one JSON array and is the sole
/// source of truth: every operation reads the full array, and every mutation
/// rewrites it. The file is pretty-printed with 2-space indentation on each
/// write so it stays readable when edited by hand.
pub struct RepertoireStore {
    path: PathBuf,
}

impl RepertoireStore {
    /// Create a store backed by the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path to the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the backing file as an empty array if it does not exist yet.
    /// An existing file is left untouched.
    pub fn ensure_initialized(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            fs::write(&self.path, "[]")?;
        }
        Ok(())
    }

    /// Read and parse the full repertoire.
    ///
    /// A missing or unparseable file is an error; the handlers surface it as
    /// a 500 rather than inventing an empty collection.
    pub fn load(&self) -> Result<Vec<Song>, StoreError> {
        let json = fs::read_to_string(&self.path)?;
        let songs: Vec<Song> = serde_json::from_str(&json)?;
        Ok(songs)
    }

    /// Serialize the full repertoire and rewrite the backing file
    pub fn save(&self, songs: &[Song]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(songs)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::NamedTempFile;

    fn songs(value: serde_json::Value) -> Vec<Song> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_path_returns_backing_file_location() {
        let store = RepertoireStore::new("repertorio.json");
        assert_eq!(store.path(), Path::new("repertorio.json"));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = RepertoireStore::new(temp_file.path());

        let repertoire = songs(json!([
            {"id": 1, "title": "A", "artist": "X"},
            {"id": 2, "title": "B"}
        ]));
        store.save(&repertoire).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, repertoire);
    }

    #[test]
    fn test_save_writes_pretty_json_with_two_space_indent() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = RepertoireStore::new(temp_file.path());

        store.save(&songs(json!([{"id": 1}]))).unwrap();

        let raw = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(raw.contains("[\n  {\n    \"id\": 1\n  }\n]"));
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        drop(temp_file);

        let store = RepertoireStore::new(&path);
        assert!(matches!(store.load(), Err(StoreError::Io(_))));
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "not json at all").unwrap();

        let store = RepertoireStore::new(temp_file.path());
        assert!(matches!(store.load(), Err(StoreError::Json(_))));
    }

    #[test]
    fn test_ensure_initialized_creates_empty_array() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_path_buf();
        drop(temp_file);

        let store = RepertoireStore::new(&path);
        store.ensure_initialized().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_initialized_leaves_existing_file_alone() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = RepertoireStore::new(temp_file.path());
        store.save(&songs(json!([{"id": 1, "title": "A"}]))).unwrap();

        store.ensure_initialized().unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }
}
