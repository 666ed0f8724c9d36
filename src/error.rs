//! Error types for layout merging
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::{FileSourceError, UpdateStoreError};
use crate::xml::XmlError;

/// Result type alias for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

/// Main error type for layout operations
#[derive(Error, Debug)]
pub enum LayoutError {
    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// No theme requested and none configured
    #[error("no theme configured; add a [[themes]] entry")]
    NoTheme,

    /// Requested theme is not declared in the configuration
    #[error("unknown theme '{code}'")]
    UnknownTheme { code: String },

    /// Theme parent chain loops back on itself
    #[error("theme '{code}' has a circular parent chain")]
    CircularTheme { code: String },

    /// Theme files may extend page types but never declare them
    #[error("Theme layout update file '{file}' must not declare page types.")]
    ThemePageDeclaration { file: PathBuf },

    /// Virtual theme with no physical ancestor to read files from
    #[error("Unable to find a physical ancestor for a theme '{code}'.")]
    NoPhysicalTheme { code: String },

    /// Merged updates do not form a well-formed document
    #[error("merged layout is not valid XML: {0}")]
    InvalidMergedLayout(#[from] XmlError),

    /// Layout files could not be listed or read
    #[error(transparent)]
    FileSource(#[from] FileSourceError),

    /// Persistent layout updates could not be fetched
    #[error(transparent)]
    UpdateStore(#[from] UpdateStoreError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_theme_page_declaration() {
        let err = LayoutError::ThemePageDeclaration {
            file: PathBuf::from("app/design/frontend/Vendor/blank/Vendor_Catalog/layout/default.xml"),
        };
        assert_eq!(
            err.to_string(),
            "Theme layout update file 'app/design/frontend/Vendor/blank/Vendor_Catalog/layout/default.xml' must not declare page types."
        );
    }

    #[test]
    fn test_error_display_unknown_theme() {
        let err = LayoutError::UnknownTheme {
            code: "Vendor/missing".to_string(),
        };
        assert_eq!(err.to_string(), "unknown theme 'Vendor/missing'");
    }
}
