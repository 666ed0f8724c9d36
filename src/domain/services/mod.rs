//! Domain Services
//!
//! - `file_layout` - all layout files of a theme folded into one document
//! - `source_aggregator` - file and persistent-store update fetching
//! - `layout_merge` - the request-scoped merge engine

pub mod file_layout;
pub mod layout_merge;
pub mod source_aggregator;

pub use file_layout::{declares_page_type, FileLayoutDocument};
pub use layout_merge::{LayoutMerge, MergeCollaborators};
pub use source_aggregator::{AggregatedFiles, Placeholders, RejectedFile, SourceAggregator};
