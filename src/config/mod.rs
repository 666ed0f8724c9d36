//! Configuration module
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAYOUT_MERGE_*)
//! 3. Project config (`layout-merge.toml`)
//! 4. User config (`<config dir>/layout-merge/config.toml`)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{user_config_path, CONFIG_FILE};
pub use types::{CacheBackendKind, CacheConfig, Config, StoreConfig, ThemeConfig, UpdatesConfig};
