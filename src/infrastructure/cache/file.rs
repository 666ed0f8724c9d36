//! On-disk cache backend
//!
//! Each key is stored as `<dir>/<key>.json` holding the value and its tags.
//! Writers take an exclusive lock on `<dir>/.lock` and replace entries
//! atomically; readers take a shared lock. Locks are released when the lock
//! file handle drops.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::ports::{CacheBackend, CacheError};
use crate::infrastructure::fs::atomic_write;

const LOCK_FILE: &str = ".lock";

#[derive(Debug, Serialize, Deserialize)]
struct StoredEntry {
    value: String,
    #[serde(default)]
    tags: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct FileCache {
    dir: PathBuf,
}

impl FileCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", file_stem(key)))
    }

    fn lock(&self) -> io::Result<File> {
        fs::create_dir_all(&self.dir)?;
        File::create(self.dir.join(LOCK_FILE))
    }

    fn remove_entries(&self, tag: Option<&str>) -> Result<usize, CacheError> {
        let mut removed = 0;
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().map_or(true, |ext| ext != "json") {
                continue;
            }
            if let Some(tag) = tag {
                let Some(stored) = read_entry(&path)? else {
                    continue;
                };
                if !stored.tags.iter().any(|t| t == tag) {
                    continue;
                }
            }
            fs::remove_file(&path)?;
            removed += 1;
        }
        Ok(removed)
    }
}

impl CacheBackend for FileCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let lock = self.lock()?;
        lock.lock_shared()?;
        Ok(read_entry(&path)?.map(|stored| stored.value))
    }

    fn save(&self, value: &str, key: &str, tags: &[String]) -> Result<(), CacheError> {
        let content = serde_json::to_string(&StoredEntry {
            value: value.to_string(),
            tags: tags.to_vec(),
        })
        .map_err(|e| CacheError::Unavailable {
            message: e.to_string(),
        })?;

        let lock = self.lock()?;
        lock.lock_exclusive()?;
        Ok(atomic_write(&self.entry_path(key), content.as_bytes())?)
    }

    fn clean(&self, tag: Option<&str>) -> Result<usize, CacheError> {
        if !self.dir.exists() {
            return Ok(0);
        }
        let lock = self.lock()?;
        lock.lock_exclusive()?;
        self.remove_entries(tag)
    }
}

/// Entry at `path`; unreadable JSON counts as absent.
fn read_entry(path: &Path) -> Result<Option<StoredEntry>, CacheError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_str(&content) {
        Ok(stored) => Ok(Some(stored)),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring corrupted cache entry");
            Ok(None)
        }
    }
}

/// Keys become file names: `[A-Za-z0-9_]` is kept, every other byte is
/// written as `-` plus two hex digits, so distinct keys never share a file.
fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' {
            stem.push(char::from(byte));
        } else {
            stem.push_str(&format!("-{byte:02x}"));
        }
    }
    stem
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CacheKey;
    use tempfile::tempdir;

    #[test]
    fn save_then_load_round_trips_value() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("layout"));

        cache
            .save("<block name=\"a\"/>", "LAYOUT_frontend_STORE1_1abc", &["default".to_string()])
            .unwrap();

        assert_eq!(
            cache.load("LAYOUT_frontend_STORE1_1abc").unwrap().as_deref(),
            Some("<block name=\"a\"/>")
        );
        assert!(dir.path().join("layout/LAYOUT_frontend_STORE1_1abc.json").exists());
    }

    #[test]
    fn missing_key_is_a_miss() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        assert_eq!(cache.load("LAYOUT_missing").unwrap(), None);
    }

    #[test]
    fn corrupted_entry_is_a_miss() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("broken.json"), "not json").unwrap();
        let cache = FileCache::new(dir.path());
        assert_eq!(cache.load("broken").unwrap(), None);
    }

    #[test]
    fn keys_are_encoded_into_file_names() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        cache.save("x", "LAYOUT_../etc/STORE1", &[]).unwrap();

        assert!(dir.path().join("LAYOUT_-2e-2e-2fetc-2fSTORE1.json").exists());
        assert_eq!(cache.load("LAYOUT_../etc/STORE1").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn keys_differing_only_in_punctuation_do_not_share_an_entry() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        let dotted = CacheKey::build("a.b", 1, 1, &["default"]);
        let underscored = CacheKey::build("a_b", 1, 1, &["default"]);
        assert_ne!(dotted, underscored);

        cache.save("<block name=\"from_a.b\"/>", dotted.as_str(), &[]).unwrap();

        assert_eq!(cache.load(underscored.as_str()).unwrap(), None);
        assert_eq!(
            cache.load(dotted.as_str()).unwrap().as_deref(),
            Some("<block name=\"from_a.b\"/>")
        );
    }

    #[test]
    fn encoded_file_names_are_distinct() {
        assert_ne!(file_stem("a-2e"), file_stem("a."));
        assert_ne!(file_stem("a_b"), file_stem("a.b"));
        assert_ne!(file_stem("a-b"), file_stem("a_b"));
    }

    #[test]
    fn clean_by_tag_removes_tagged_entries() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        cache.save("a", "k1", &["default".to_string()]).unwrap();
        cache.save("b", "k2", &["checkout_cart_index".to_string()]).unwrap();

        assert_eq!(cache.clean(Some("default")).unwrap(), 1);
        assert_eq!(cache.load("k1").unwrap(), None);
        assert_eq!(cache.load("k2").unwrap().as_deref(), Some("b"));
    }

    #[test]
    fn clean_without_tag_removes_every_entry() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path());
        cache.save("a", "k1", &["default".to_string()]).unwrap();
        cache.save("files", "k1_FILES", &[]).unwrap();

        assert_eq!(cache.clean(None).unwrap(), 2);
        assert_eq!(cache.load("k1_FILES").unwrap(), None);
        assert!(dir.path().join(LOCK_FILE).exists());
    }

    #[test]
    fn clean_of_missing_directory_removes_nothing() {
        let dir = tempdir().unwrap();
        let cache = FileCache::new(dir.path().join("never-created"));
        assert_eq!(cache.clean(None).unwrap(), 0);
        assert!(!dir.path().join("never-created").exists());
    }
}
