//! AppState port
//!
//! Installation state and runtime mode of the storefront.

use crate::domain::value_objects::AppMode;

pub trait AppState: Send + Sync {
    /// Persistent layout updates are only consulted once installed.
    fn is_installed(&self) -> bool;

    fn mode(&self) -> AppMode;
}
