//! Domain Entities
//!
//! - `HandleSet` - requested layout handles and page handles
//! - `Theme`, `Store`, `LayoutContext` - merge scope supplied by the storefront
//! - `LayoutFile` - a layout update file on disk
//! - `DesignAbstraction` - layouts tagged for theme customization
//! - `PageHandleNode` - page-type hierarchy

mod design_abstraction;
mod handle_set;
mod layout_file;
mod page_handle;
mod theme;

pub use design_abstraction::{
    is_custom_design_abstraction, is_page_layout_design_abstraction, AbstractionKind,
    DesignAbstraction,
};
pub use handle_set::{select_page_handles, HandleSet};
pub use layout_file::LayoutFile;
pub use page_handle::{build_hierarchy, PageHandleDeclaration, PageHandleNode};
pub use theme::{LayoutContext, Store, Theme};
