//! Storage operations for word lists
//!
//! Everything lives in one flat storage directory:
//! ```text
//! <dir>/
//! ├── <name>.json   # One file per named word list
//! ├── review.json   # Reserved: the pending review queue
//! └── count.txt     # Lifetime memorized-word count, plain decimal
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::models::WordList;

/// Reserved name of the review queue list.
pub const REVIEW_LIST: &str = "review";

/// File holding the lifetime memorized-word count.
const COUNT_FILE: &str = "count.txt";

#[derive(Error, Debug)]
pub enum VocabStorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Not a directory: {0}")]
    InvalidDir(PathBuf),

    #[error("'{0}' is a reserved list name")]
    ReservedName(String),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, VocabStorageError>;

/// Storage manager for one vocabulary directory
pub struct VocabStorage {
    dir: PathBuf,
}

impl VocabStorage {
    /// Open an existing storage directory.
    pub fn new(dir: PathBuf) -> Result<Self> {
        if !dir.is_dir() {
            return Err(VocabStorageError::InvalidDir(dir));
        }
        Ok(Self { dir })
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("memorizer"))
            .ok_or(VocabStorageError::DataDirNotFound)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn list_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", name))
    }

    fn count_path(&self) -> PathBuf {
        self.dir.join(COUNT_FILE)
    }

    /// Check whether `<name>.json` exists (exact match).
    pub fn list_exists(&self, name: &str) -> bool {
        self.list_path(name).exists()
    }

    /// Load `<name>.json`. A missing file or a malformed body yields an
    /// empty list carrying `name`; parse failures never propagate.
    pub fn load_list(&self, name: &str) -> WordList {
        let path = self.list_path(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                if err.kind() != ErrorKind::NotFound {
                    log::warn!("Failed to read {}: {}", path.display(), err);
                }
                return WordList::new(name);
            }
        };
        match serde_json::from_str(&content) {
            Ok(list) => list,
            Err(err) => {
                log::warn!("Malformed word list {}: {}", path.display(), err);
                WordList::new(name)
            }
        }
    }

    /// Serialize a list to `<name>.json`, overwriting any existing file.
    /// The unnamed sentinel is silently skipped.
    pub fn save_list(&self, list: &WordList) -> Result<()> {
        if list.is_unnamed() {
            return Ok(());
        }
        let json = serde_json::to_string_pretty(list)?;
        fs::write(self.list_path(&list.name), json)?;
        Ok(())
    }

    /// Stems of every `.json` file in the directory except the reserved
    /// review queue, sorted.
    pub fn list_names(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if stem != REVIEW_LIST {
                        names.push(stem.to_string());
                    }
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Case-insensitive match of `name` against existing `<stem>.json`
    /// files; returns the on-disk stem.
    pub fn resolve_name(&self, name: &str) -> Result<Option<String>> {
        let wanted = name.to_lowercase();
        for entry in fs::read_dir(&self.dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    if stem.to_lowercase() == wanted {
                        return Ok(Some(stem.to_string()));
                    }
                }
            }
        }
        Ok(None)
    }

    /// Delete `<name>.json` (case-insensitive). Returns whether a file was
    /// removed. The review queue cannot be deleted.
    pub fn delete_list(&self, name: &str) -> Result<bool> {
        if name.eq_ignore_ascii_case(REVIEW_LIST) {
            return Err(VocabStorageError::ReservedName(name.to_string()));
        }
        match self.resolve_name(name)? {
            Some(stem) => {
                fs::remove_file(self.list_path(&stem))?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Read the lifetime count from `count.txt`, creating the file with 0
    /// on first use. A body that does not parse as a decimal integer is
    /// deleted and recreated with 0.
    pub fn load_total_count(&self) -> Result<u64> {
        let path = self.count_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                self.save_total_count(0)?;
                return Ok(0);
            }
            Err(err) => return Err(err.into()),
        };
        match content.trim().parse::<u64>() {
            Ok(count) => Ok(count),
            Err(_) => {
                log::warn!("Corrupt counter file {}, resetting to 0", path.display());
                fs::remove_file(&path)?;
                self.save_total_count(0)?;
                Ok(0)
            }
        }
    }

    /// Write the lifetime count as plain decimal text.
    pub fn save_total_count(&self, count: u64) -> Result<()> {
        fs::write(self.count_path(), count.to_string())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (VocabStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = VocabStorage::new(temp_dir.path().to_path_buf()).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_missing_dir_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope");
        assert!(matches!(
            VocabStorage::new(missing),
            Err(VocabStorageError::InvalidDir(_))
        ));
    }

    #[test]
    fn test_save_load_round_trip() {
        let (storage, _temp) = create_test_storage();

        let mut list = WordList::new("animals");
        list.insert("cat", "a small feline");
        list.insert("dog", "a canine");
        storage.save_list(&list).unwrap();

        let loaded = storage.load_list("animals");
        assert_eq!(loaded.name, "animals");
        assert_eq!(loaded.list, list.list);
    }

    #[test]
    fn test_load_missing_returns_empty() {
        let (storage, _temp) = create_test_storage();
        let loaded = storage.load_list("ghost");
        assert_eq!(loaded.name, "ghost");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_load_malformed_returns_empty() {
        let (storage, temp) = create_test_storage();
        fs::write(temp.path().join("broken.json"), "{not json").unwrap();

        let loaded = storage.load_list("broken");
        assert_eq!(loaded.name, "broken");
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_unnamed_list_is_not_persisted() {
        let (storage, temp) = create_test_storage();
        let mut list = WordList::unnamed();
        list.insert("cat", "a small feline");
        storage.save_list(&list).unwrap();

        assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_list_names_skips_review_and_non_json() {
        let (storage, temp) = create_test_storage();
        storage.save_list(&WordList::new("verbs")).unwrap();
        storage.save_list(&WordList::new("animals")).unwrap();
        storage.save_list(&WordList::new(REVIEW_LIST)).unwrap();
        fs::write(temp.path().join("notes.txt"), "not a list").unwrap();

        assert_eq!(storage.list_names().unwrap(), vec!["animals", "verbs"]);
    }

    #[test]
    fn test_resolve_name_is_case_insensitive() {
        let (storage, _temp) = create_test_storage();
        storage.save_list(&WordList::new("Animals")).unwrap();

        assert_eq!(
            storage.resolve_name("aNiMaLs").unwrap(),
            Some("Animals".to_string())
        );
        assert_eq!(storage.resolve_name("plants").unwrap(), None);
    }

    #[test]
    fn test_delete_list() {
        let (storage, _temp) = create_test_storage();
        storage.save_list(&WordList::new("animals")).unwrap();

        assert!(storage.delete_list("ANIMALS").unwrap());
        assert!(!storage.delete_list("animals").unwrap());
        assert!(matches!(
            storage.delete_list("Review"),
            Err(VocabStorageError::ReservedName(_))
        ));
    }

    #[test]
    fn test_counter_created_on_first_use() {
        let (storage, temp) = create_test_storage();
        assert_eq!(storage.load_total_count().unwrap(), 0);

        let content = fs::read_to_string(temp.path().join("count.txt")).unwrap();
        assert_eq!(content, "0");
    }

    #[test]
    fn test_counter_round_trip() {
        let (storage, _temp) = create_test_storage();
        storage.save_total_count(42).unwrap();
        assert_eq!(storage.load_total_count().unwrap(), 42);
    }

    #[test]
    fn test_corrupt_counter_resets_to_zero() {
        let (storage, temp) = create_test_storage();
        fs::write(temp.path().join("count.txt"), "abc").unwrap();

        assert_eq!(storage.load_total_count().unwrap(), 0);
        let content = fs::read_to_string(temp.path().join("count.txt")).unwrap();
        assert_eq!(content, "0");
    }
}
