//! layout-merge - layout update resolution, merging and caching
//!
//! Collects the layout updates that apply to a set of handles for one
//! theme/store context, merges them in a deterministic order, caches the
//! result, and resolves theme files through a mode-dependent fallback
//! strategy.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod xml;

// Re-exports for convenience
pub use config::Config;
pub use domain::entities::{DesignAbstraction, HandleSet, Store, Theme};
pub use domain::services::{LayoutMerge, MergeCollaborators};
pub use domain::value_objects::{AppMode, CacheKey};
pub use error::{LayoutError, LayoutResult};
pub use infrastructure::{StrategyKind, StrategyPool};
pub use xml::{XmlElement, XmlError};
