//! Domain Ports (Interfaces)
//!
//! Collaborators the merge core calls into.
//! Infrastructure layer provides concrete implementations.

pub mod app_state;
pub mod cache_backend;
pub mod file_resolution;
pub mod file_source;
pub mod logger;
pub mod update_store;

pub use app_state::AppState;
pub use cache_backend::{CacheBackend, CacheError};
pub use file_resolution::FileResolution;
pub use file_source::{FileSource, FileSourceError, FileSourceResult};
pub use logger::{LayoutLogger, LogChannel, Severity};
pub use update_store::{LayoutUpdateStore, NoLayoutUpdates, UpdateStoreError};
