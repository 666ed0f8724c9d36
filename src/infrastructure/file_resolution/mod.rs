//! File Resolution Strategies
//!
//! - `Fallback` - candidate directory walk
//! - `CachingProxy` - persisted memo over `Fallback`
//! - `StrategyPool` - mode-driven selection between the two

mod caching_proxy;
mod fallback;
mod pool;

pub use caching_proxy::CachingProxy;
pub use fallback::Fallback;
pub use pool::{StrategyKind, StrategyPool, FALLBACK_MAP_DIR};
