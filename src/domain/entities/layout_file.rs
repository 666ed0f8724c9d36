//! Layout file entity
//!
//! A layout update file on disk. Its stem names the handle it declares.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutFile {
    path: PathBuf,
    module: String,
    theme: Option<String>,
}

impl LayoutFile {
    pub fn new(path: impl Into<PathBuf>, module: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            module: module.into(),
            theme: None,
        }
    }

    /// Mark the file as contributed by a theme rather than a module.
    pub fn with_theme(mut self, theme_code: impl Into<String>) -> Self {
        self.theme = Some(theme_code.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Module context such as `Vendor_Catalog`.
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn theme(&self) -> Option<&str> {
        self.theme.as_deref()
    }

    /// Base files come from modules; only they may declare page types.
    pub fn is_base(&self) -> bool {
        self.theme.is_none()
    }

    /// Handle declared by this file (`catalog_product_view.xml` → `catalog_product_view`).
    pub fn handle_name(&self) -> String {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}
