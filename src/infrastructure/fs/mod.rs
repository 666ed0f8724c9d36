//! File System Implementations
//!
//! - `DirectoryFileSource` - layout files under a storefront base directory
//! - `atomic_write` - temp-file-and-rename writes shared by the disk caches

mod atomic;
mod layout_source;

pub use atomic::atomic_write;
pub use layout_source::DirectoryFileSource;
