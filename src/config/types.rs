//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Store, Theme};
use crate::domain::value_objects::{AppMode, ConfigWarning};
use crate::error::{LayoutError, LayoutResult};

use super::loader;

/// Theme declaration
///
/// ```toml
/// [[themes]]
/// id = 2
/// code = "Vendor/luma"
/// parent = "Vendor/blank"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub id: u32,
    pub code: String,

    /// Defaults to the top-level `area`
    #[serde(default)]
    pub area: Option<String>,

    #[serde(default)]
    pub parent: Option<String>,

    /// Virtual themes have no files on disk
    #[serde(default = "default_true")]
    pub physical: bool,
}

/// Store view the layout is merged for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_id")]
    pub id: u32,

    #[serde(default)]
    pub base_url: String,

    /// Defaults to `base_url`
    #[serde(default)]
    pub secure_base_url: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            id: default_store_id(),
            base_url: String::new(),
            secure_base_url: None,
        }
    }
}

/// Layout cache backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackendKind {
    Memory,
    #[default]
    File,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackendKind,

    /// Defaults to `<base_dir>/var/cache/layout`
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Persistent layout update store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpdatesConfig {
    /// TOML file of stored updates; none configured means no stored updates
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Storefront root holding `app/code` and `app/design`
    #[serde(default = "default_base_dir")]
    pub base_dir: PathBuf,

    #[serde(default)]
    pub mode: AppMode,

    /// Stored layout updates are only read once installed
    #[serde(default)]
    pub installed: bool,

    #[serde(default = "default_area")]
    pub area: String,

    /// Active theme code; defaults to the first declared theme
    #[serde(default)]
    pub theme: Option<String>,

    #[serde(default)]
    pub themes: Vec<ThemeConfig>,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub updates: UpdatesConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: default_base_dir(),
            mode: AppMode::default(),
            installed: false,
            area: default_area(),
            theme: None,
            themes: Vec::new(),
            store: StoreConfig::default(),
            cache: CacheConfig::default(),
            updates: UpdatesConfig::default(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_store_id() -> u32 {
    1
}

fn default_base_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_area() -> String {
    "frontend".to_string()
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LayoutResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LayoutResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> Self {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (LAYOUT_MERGE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolve a theme and its parent chain.
    ///
    /// `code` falls back to the configured active theme, then to the first
    /// declared theme.
    pub fn theme(&self, code: Option<&str>) -> LayoutResult<Theme> {
        let code = code
            .or(self.theme.as_deref())
            .or_else(|| self.themes.first().map(|t| t.code.as_str()))
            .ok_or(LayoutError::NoTheme)?;
        self.build_theme(code, &mut Vec::new())
    }

    fn build_theme<'a>(&'a self, code: &'a str, visiting: &mut Vec<&'a str>) -> LayoutResult<Theme> {
        if visiting.contains(&code) {
            return Err(LayoutError::CircularTheme {
                code: code.to_string(),
            });
        }
        let declared = self
            .themes
            .iter()
            .find(|t| t.code == code)
            .ok_or_else(|| LayoutError::UnknownTheme {
                code: code.to_string(),
            })?;
        visiting.push(code);

        let area = declared.area.as_deref().unwrap_or(&self.area);
        let mut theme = Theme::new(declared.id, area, &declared.code).with_physical(declared.physical);
        if let Some(parent) = declared.parent.as_deref() {
            theme = theme.with_parent(self.build_theme(parent, visiting)?);
        }
        Ok(theme)
    }

    pub fn store(&self) -> Store {
        let store = Store::new(self.store.id).with_base_url(&self.store.base_url);
        match &self.store.secure_base_url {
            Some(url) => store.with_secure_base_url(url),
            None => store,
        }
    }

    pub fn cache_dir(&self) -> PathBuf {
        match &self.cache.dir {
            Some(dir) => self.base_dir.join(dir),
            None => self.base_dir.join("var").join("cache").join("layout"),
        }
    }

    pub fn updates_path(&self) -> Option<PathBuf> {
        self.updates.path.as_ref().map(|path| self.base_dir.join(path))
    }
}
