//! File resolution strategy pool
//!
//! Chooses the resolution strategy from the application mode: developers get
//! the direct [`Fallback`] walk so new files show up immediately; default and
//! production modes go through the [`CachingProxy`]. The mode is read once
//! and the strategy is created once per pool.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::debug;

use super::caching_proxy::CachingProxy;
use super::fallback::Fallback;
use crate::domain::ports::{AppState, FileResolution};
use crate::domain::value_objects::AppMode;

/// Location of the persisted fallback maps, relative to `<base>/var`.
pub const FALLBACK_MAP_DIR: &str = "maps/fallback";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyKind {
    Fallback,
    CachingProxy,
}

impl StrategyKind {
    pub fn for_mode(mode: AppMode) -> Self {
        match mode {
            AppMode::Developer => StrategyKind::Fallback,
            AppMode::Default | AppMode::Production => StrategyKind::CachingProxy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKind::Fallback => "fallback",
            StrategyKind::CachingProxy => "caching-proxy",
        }
    }
}

pub struct StrategyPool {
    app_state: Arc<dyn AppState>,
    base_dir: PathBuf,
    kind: OnceLock<StrategyKind>,
    strategy: OnceLock<Arc<dyn FileResolution>>,
}

impl StrategyPool {
    pub fn new(app_state: Arc<dyn AppState>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_state,
            base_dir: base_dir.into(),
            kind: OnceLock::new(),
            strategy: OnceLock::new(),
        }
    }

    /// `<base>/var/maps/fallback`
    pub fn map_dir(&self) -> PathBuf {
        self.base_dir.join("var").join(FALLBACK_MAP_DIR)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn kind(&self) -> StrategyKind {
        *self
            .kind
            .get_or_init(|| StrategyKind::for_mode(self.app_state.mode()))
    }

    pub fn file_strategy(&self) -> Arc<dyn FileResolution> {
        self.strategy()
    }

    pub fn locale_strategy(&self) -> Arc<dyn FileResolution> {
        self.strategy()
    }

    pub fn view_strategy(&self) -> Arc<dyn FileResolution> {
        self.strategy()
    }

    fn strategy(&self) -> Arc<dyn FileResolution> {
        Arc::clone(self.strategy.get_or_init(|| self.create(self.kind())))
    }

    fn create(&self, kind: StrategyKind) -> Arc<dyn FileResolution> {
        debug!(strategy = kind.as_str(), base_dir = %self.base_dir.display(), "file resolution strategy created");
        let fallback = Fallback::new(&self.base_dir);
        match kind {
            StrategyKind::Fallback => Arc::new(fallback),
            StrategyKind::CachingProxy => Arc::new(CachingProxy::new(fallback, self.map_dir())),
        }
    }
}
