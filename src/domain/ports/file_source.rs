//! FileSource port
//!
//! Lists the layout update files visible to a theme. The area is taken from
//! the theme.

use std::path::PathBuf;

use crate::domain::entities::{LayoutFile, Theme};

/// Result type for file source operations
pub type FileSourceResult<T> = Result<T, FileSourceError>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FileSourceError {
    #[error("layout directory not readable: {path}: {message}")]
    DirectoryUnreadable { path: PathBuf, message: String },

    #[error("layout file not readable: {path}: {message}")]
    FileUnreadable { path: PathBuf, message: String },
}

/// Abstract source of layout files
///
/// Implementations:
/// - `DirectoryFileSource` - module and theme directories on disk
/// - in-memory sources in tests
pub trait FileSource: Send + Sync {
    /// Layout files for `theme`, in merge order.
    fn files(&self, theme: &Theme) -> FileSourceResult<Vec<LayoutFile>>;

    /// Read a file returned by [`FileSource::files`].
    fn read(&self, file: &LayoutFile) -> FileSourceResult<String> {
        std::fs::read_to_string(file.path()).map_err(|e| FileSourceError::FileUnreadable {
            path: file.path().to_path_buf(),
            message: e.to_string(),
        })
    }
}
