//! Layout Cache Backends
//!
//! - `MemoryCache` - process-local map, tag aware
//! - `FileCache` - one JSON file per key under a cache directory
//! - `NullCache` - never hits

mod file;
mod memory;
mod null;

pub use file::FileCache;
pub use memory::MemoryCache;
pub use null::NullCache;
