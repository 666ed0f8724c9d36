//! Cache backend that stores nothing.

use crate::domain::ports::{CacheBackend, CacheError};

#[derive(Debug, Clone, Copy, Default)]
pub struct NullCache;

impl CacheBackend for NullCache {
    fn load(&self, _key: &str) -> Result<Option<String>, CacheError> {
        Ok(None)
    }

    fn save(&self, _value: &str, _key: &str, _tags: &[String]) -> Result<(), CacheError> {
        Ok(())
    }

    fn clean(&self, _tag: Option<&str>) -> Result<usize, CacheError> {
        Ok(0)
    }
}
