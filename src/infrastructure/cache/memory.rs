//! In-memory cache backend
//!
//! Shared across engines through `Arc`. Entries keep their tags so callers
//! can clean every layout merged for a handle.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{CacheBackend, CacheError};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    tags: Vec<String>,
}

#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CacheBackend for MemoryCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        Ok(self.entries().get(key).map(|entry| entry.value.clone()))
    }

    fn save(&self, value: &str, key: &str, tags: &[String]) -> Result<(), CacheError> {
        self.entries().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                tags: tags.to_vec(),
            },
        );
        Ok(())
    }

    fn clean(&self, tag: Option<&str>) -> Result<usize, CacheError> {
        let mut entries = self.entries();
        let before = entries.len();
        match tag {
            Some(tag) => entries.retain(|_, entry| !entry.tags.iter().any(|t| t == tag)),
            None => entries.clear(),
        }
        Ok(before - entries.len())
    }
}
