//! Application state fixed at startup (from configuration).

use crate::domain::ports::AppState;
use crate::domain::value_objects::AppMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticAppState {
    installed: bool,
    mode: AppMode,
}

impl StaticAppState {
    pub fn new(installed: bool, mode: AppMode) -> Self {
        Self { installed, mode }
    }
}

impl AppState for StaticAppState {
    fn is_installed(&self) -> bool {
        self.installed
    }

    fn mode(&self) -> AppMode {
        self.mode
    }
}
