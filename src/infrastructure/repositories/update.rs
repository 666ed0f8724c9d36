//! TOML Layout Update Repository
//!
//! Persistent layout updates kept in a TOML file:
//!
//! ```toml
//! [[updates]]
//! handle = "default"
//! theme_id = 1
//! store_id = 0      # 0 applies to every store
//! sort_order = 10
//! xml = '<referenceContainer name="footer"/>'
//! ```
//!
//! The file is maintained by the storefront; this repository only reads it.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Store, Theme};
use crate::domain::ports::{LayoutUpdateStore, UpdateStoreError};

/// Store id that matches every store.
pub const ALL_STORES: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutUpdateRecord {
    pub handle: String,
    pub theme_id: u32,
    #[serde(default)]
    pub store_id: u32,
    #[serde(default)]
    pub sort_order: i32,
    pub xml: String,
}

impl LayoutUpdateRecord {
    fn applies_to(&self, handle: &str, theme: &Theme, store: &Store) -> bool {
        self.handle == handle
            && self.theme_id == theme.id()
            && (self.store_id == ALL_STORES || self.store_id == store.id())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlUpdates {
    #[serde(default)]
    updates: Vec<LayoutUpdateRecord>,
}

pub struct TomlUpdateRepository {
    path: PathBuf,
}

impl TomlUpdateRepository {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Vec<LayoutUpdateRecord>, UpdateStoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| UpdateStoreError::Unavailable {
            message: e.to_string(),
        })?;
        let parsed: TomlUpdates =
            toml::from_str(&content).map_err(|e| UpdateStoreError::Corrupted {
                path: self.path.clone(),
                message: e.to_string(),
            })?;
        Ok(parsed.updates)
    }
}

impl LayoutUpdateStore for TomlUpdateRepository {
    fn fetch_updates_by_handle(
        &self,
        handle: &str,
        theme: &Theme,
        store: &Store,
    ) -> Result<String, UpdateStoreError> {
        let mut matching: Vec<LayoutUpdateRecord> = self
            .load()?
            .into_iter()
            .filter(|record| record.applies_to(handle, theme, store))
            .collect();
        matching.sort_by_key(|record| record.sort_order);
        Ok(matching.into_iter().map(|record| record.xml).collect())
    }
}
