//! Layout Cache Key Value Object
//!
//! Identifies one merged layout in the cache backend. The key is a pure
//! function of area, store, theme and the handle list.

use std::fmt;

use sha2::{Digest, Sha256};

use crate::domain::entities::LayoutContext;

/// Number of digest bytes kept in the key (32 hex chars).
const DIGEST_BYTES: usize = 16;

/// Cache key for a merged layout
///
/// Shape: `LAYOUT_{area}_STORE{store}_{theme}{digest}` where the digest covers
/// the handles joined by `|`. Handle order is significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    pub const PREFIX: &'static str = "LAYOUT_";

    /// Suffix of the key holding the file-only layout document.
    pub const FILE_LAYOUT_SUFFIX: &'static str = "_FILES";

    pub fn build<S: AsRef<str>>(area: &str, store_id: u32, theme_id: u32, handles: &[S]) -> Self {
        let joined = handles
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("|");
        Self(format!(
            "{}{}",
            scope_prefix(area, store_id, theme_id),
            digest_hex(&joined)
        ))
    }

    pub fn for_context<S: AsRef<str>>(context: &LayoutContext, handles: &[S]) -> Self {
        Self::build(
            context.area(),
            context.store_id(),
            context.theme_id(),
            handles,
        )
    }

    /// Key of the aggregated file layout document for a context.
    pub fn file_layout(context: &LayoutContext) -> Self {
        Self(format!(
            "{}{}",
            scope_prefix(context.area(), context.store_id(), context.theme_id()),
            Self::FILE_LAYOUT_SUFFIX
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn scope_prefix(area: &str, store_id: u32, theme_id: u32) -> String {
    format!("{}{}_STORE{}_{}", CacheKey::PREFIX, area, store_id, theme_id)
}

fn digest_hex(input: &str) -> String {
    let digest = Sha256::digest(input.as_bytes());
    digest[..DIGEST_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
