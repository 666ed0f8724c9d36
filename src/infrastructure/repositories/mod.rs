//! Repository Implementations
//!
//! Concrete implementations of domain repository ports.

mod update;

pub use update::{LayoutUpdateRecord, TomlUpdateRepository, ALL_STORES};
