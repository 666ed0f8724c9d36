//! FileResolution port
//!
//! Resolves theme files, locale files and static view files through the
//! theme inheritance chain.

use std::path::PathBuf;

use crate::domain::entities::Theme;

/// Fallback file-resolution strategy
///
/// Implementations:
/// - `Fallback` - walks the candidate directories on every call
/// - `CachingProxy` - memoizes `Fallback` results in persisted maps
pub trait FileResolution: Send + Sync {
    /// Template or layout file, optionally scoped to a module (`Vendor_Module`).
    fn file(&self, area: &str, theme: &Theme, file: &str, module: Option<&str>) -> PathBuf;

    /// Translation file for `locale`.
    fn locale_file(&self, area: &str, theme: &Theme, locale: &str, file: &str) -> PathBuf;

    /// Static view file (scripts, styles, images).
    fn view_file(
        &self,
        area: &str,
        theme: &Theme,
        locale: &str,
        file: &str,
        module: Option<&str>,
    ) -> PathBuf;
}
