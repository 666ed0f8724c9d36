//! LayoutUpdateStore port
//!
//! Persistent layout updates registered against a handle, theme and store
//! (edited through the admin, stored outside the file system).

use std::path::PathBuf;

use crate::domain::entities::{Store, Theme};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UpdateStoreError {
    #[error("layout update store unavailable: {message}")]
    Unavailable { message: String },

    #[error("layout update store at {path} is corrupted: {message}")]
    Corrupted { path: PathBuf, message: String },
}

pub trait LayoutUpdateStore: Send + Sync {
    /// Concatenated update XML for `handle`, or an empty string.
    fn fetch_updates_by_handle(
        &self,
        handle: &str,
        theme: &Theme,
        store: &Store,
    ) -> Result<String, UpdateStoreError>;
}

/// Store with no persistent updates.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLayoutUpdates;

impl LayoutUpdateStore for NoLayoutUpdates {
    fn fetch_updates_by_handle(
        &self,
        _handle: &str,
        _theme: &Theme,
        _store: &Store,
    ) -> Result<String, UpdateStoreError> {
        Ok(String::new())
    }
}
