//! Engine Factory
//!
//! Builds merge engines and strategy pools with infrastructure dependencies
//! wired up from a [`Config`]. This is the dependency injection point for
//! the binary.

use std::sync::Arc;

use tracing::debug;

use crate::config::{CacheBackendKind, Config};
use crate::domain::ports::{AppState, CacheBackend, LayoutUpdateStore, NoLayoutUpdates};
use crate::domain::services::{LayoutMerge, MergeCollaborators};
use crate::error::LayoutResult;
use crate::infrastructure::{
    DirectoryFileSource, FileCache, MemoryCache, NullCache, StaticAppState, StrategyPool,
    TomlUpdateRepository, TracingLogger,
};

pub fn create_app_state(config: &Config) -> Arc<dyn AppState> {
    Arc::new(StaticAppState::new(config.installed, config.mode))
}

pub fn create_cache(config: &Config) -> Arc<dyn CacheBackend> {
    match config.cache.backend {
        CacheBackendKind::Memory => Arc::new(MemoryCache::new()),
        CacheBackendKind::File => Arc::new(FileCache::new(config.cache_dir())),
        CacheBackendKind::None => Arc::new(NullCache),
    }
}

/// No configured path means no persistent updates.
pub fn create_update_store(config: &Config) -> Arc<dyn LayoutUpdateStore> {
    match config.updates_path() {
        Some(path) => Arc::new(TomlUpdateRepository::with_path(path)),
        None => Arc::new(NoLayoutUpdates),
    }
}

pub fn create_collaborators(config: &Config) -> MergeCollaborators {
    MergeCollaborators {
        file_source: Arc::new(DirectoryFileSource::new(&config.base_dir)),
        update_store: create_update_store(config),
        app_state: create_app_state(config),
        cache: create_cache(config),
        logger: Arc::new(TracingLogger),
    }
}

/// Create a merge engine for `theme_code` (or the configured theme).
pub fn create_layout_merge(config: &Config, theme_code: Option<&str>) -> LayoutResult<LayoutMerge> {
    create_layout_merge_with(config, theme_code, create_collaborators(config))
}

/// Same as [`create_layout_merge`] with caller-supplied collaborators.
pub fn create_layout_merge_with(
    config: &Config,
    theme_code: Option<&str>,
    collaborators: MergeCollaborators,
) -> LayoutResult<LayoutMerge> {
    let theme = config.theme(theme_code)?;
    let store = config.store();
    debug!(
        theme = theme.code(),
        store = store.id(),
        mode = %config.mode,
        cache = ?config.cache.backend,
        "layout merge created"
    );
    Ok(LayoutMerge::new(theme, store, collaborators))
}

pub fn create_strategy_pool(config: &Config) -> StrategyPool {
    StrategyPool::new(create_app_state(config), &config.base_dir)
}
