//! CacheBackend port
//!
//! Shared key-value store for merged layouts. Eviction and concurrency
//! safety belong to the backend; callers treat `load`/`save` as atomic.

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache backend unavailable: {message}")]
    Unavailable { message: String },

    #[error("cache IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub trait CacheBackend: Send + Sync {
    /// Cached value for `key`, `None` on a miss.
    fn load(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, value: &str, key: &str, tags: &[String]) -> Result<(), CacheError>;

    /// Remove the entries tagged with `tag`, or every entry when `tag` is
    /// `None`. Returns how many entries were removed.
    fn clean(&self, tag: Option<&str>) -> Result<usize, CacheError>;
}
