//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating merge engines with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use layout_merge::presentation::factory;
//!
//! let mut merge = factory::create_layout_merge(&config, None)?;
//! merge.load_handles(["default", "cms_index_index"])?;
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{CacheCommand, Cli, Commands, ResolveKind};
pub use factory::{create_layout_merge, create_strategy_pool};
pub use output::OutputFormat;
