//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod app_mode;
mod cache_key;
mod config_warning;

pub use app_mode::{AppMode, UnknownModeError};
pub use cache_key::CacheKey;
pub use config_warning::ConfigWarning;
