//! Source aggregator
//!
//! Fetches raw layout updates from the two origins: layout files (through
//! [`FileSource`]) and the persistent update store (only once the
//! application is installed). Parsing is fallible per fragment; rejected
//! fragments are returned to the caller for reporting instead of aborting
//! the aggregation.

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::entities::{Store, Theme};
use crate::domain::ports::{AppState, FileSource, LayoutUpdateStore};
use crate::domain::services::file_layout::{declares_page_type, FileLayoutDocument};
use crate::error::{LayoutError, LayoutResult};
use crate::xml::{parse_document, parse_fragment, XmlElement, XmlError};

/// Store URL placeholders usable inside layout XML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    base_url: String,
    secure_base_url: String,
}

impl Placeholders {
    pub const BASE_URL: &'static str = "{{baseUrl}}";
    pub const SECURE_BASE_URL: &'static str = "{{baseSecureUrl}}";

    pub fn for_store(store: &Store) -> Self {
        Self {
            base_url: store.base_url().to_string(),
            secure_base_url: store.secure_base_url().to_string(),
        }
    }

    pub fn apply(&self, xml: &str) -> String {
        xml.replace(Self::BASE_URL, &self.base_url)
            .replace(Self::SECURE_BASE_URL, &self.secure_base_url)
    }
}

/// A layout file that failed to parse or read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedFiles {
    pub document: FileLayoutDocument,
    pub rejected: Vec<RejectedFile>,
}

pub struct SourceAggregator {
    file_source: Arc<dyn FileSource>,
    update_store: Arc<dyn LayoutUpdateStore>,
    app_state: Arc<dyn AppState>,
    placeholders: Placeholders,
}

impl SourceAggregator {
    pub fn new(
        file_source: Arc<dyn FileSource>,
        update_store: Arc<dyn LayoutUpdateStore>,
        app_state: Arc<dyn AppState>,
        placeholders: Placeholders,
    ) -> Self {
        Self {
            file_source,
            update_store,
            app_state,
            placeholders,
        }
    }

    /// Fold every layout file of `theme` into one document, in file order.
    ///
    /// Unreadable or malformed files are skipped and reported in
    /// `rejected`. A theme file declaring a page type is fatal. Virtual
    /// themes read the files of their nearest physical ancestor.
    pub fn file_layout(&self, theme: &Theme) -> LayoutResult<AggregatedFiles> {
        let physical = theme
            .physical_ancestor()
            .ok_or_else(|| LayoutError::NoPhysicalTheme {
                code: theme.code().to_string(),
            })?;
        let mut document = FileLayoutDocument::empty();
        let mut rejected = Vec::new();

        for file in self.file_source.files(physical)? {
            let content = match self.file_source.read(&file) {
                Ok(content) => content,
                Err(e) => {
                    rejected.push(RejectedFile {
                        path: file.path().to_path_buf(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let root = match parse_document(&self.placeholders.apply(&content)) {
                Ok(root) => root,
                Err(e) => {
                    rejected.push(RejectedFile {
                        path: file.path().to_path_buf(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if !file.is_base() && declares_page_type(&root) {
                return Err(LayoutError::ThemePageDeclaration {
                    file: file.path().to_path_buf(),
                });
            }
            document.push_file(&file, root);
        }

        Ok(AggregatedFiles { document, rejected })
    }

    /// Persistent update for `handle`, parsed as a fragment.
    ///
    /// `None` when the application is not installed (the store is never
    /// queried) or when nothing is registered for the handle.
    pub fn stored_update(
        &self,
        handle: &str,
        theme: &Theme,
        store: &Store,
    ) -> LayoutResult<Option<Result<XmlElement, XmlError>>> {
        if !self.app_state.is_installed() {
            return Ok(None);
        }

        let raw = self
            .update_store
            .fetch_updates_by_handle(handle, theme, store)?;
        if raw.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(parse_fragment(&self.placeholders.apply(&raw))))
    }
}
