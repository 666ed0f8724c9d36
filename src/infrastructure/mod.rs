//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Layout files on disk, atomic writes
//! - `cache/` - Layout cache backends (memory, file, null)
//! - `repositories/` - Persistent layout update store
//! - `file_resolution/` - Fallback strategies and the strategy pool

pub mod app_state;
pub mod cache;
pub mod file_resolution;
pub mod fs;
pub mod logging;
pub mod repositories;

// Re-export for convenience
pub use app_state::StaticAppState;
pub use cache::{FileCache, MemoryCache, NullCache};
pub use file_resolution::{CachingProxy, Fallback, StrategyKind, StrategyPool, FALLBACK_MAP_DIR};
pub use fs::DirectoryFileSource;
pub use logging::TracingLogger;
pub use repositories::{LayoutUpdateRecord, TomlUpdateRepository};
