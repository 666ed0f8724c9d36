//! Command handlers

pub mod cache;
pub mod inspect;
pub mod merge;
pub mod resolve;

use anyhow::Result;

use layout_merge::config::Config;
use layout_merge::domain::services::LayoutMerge;
use layout_merge::presentation::{factory, OutputFormat};

/// Settings shared by every command.
pub struct CommandContext {
    pub config: Config,
    pub theme: Option<String>,
    pub format: OutputFormat,
}

impl CommandContext {
    pub fn layout_merge(&self) -> Result<LayoutMerge> {
        Ok(factory::create_layout_merge(&self.config, self.theme.as_deref())?)
    }

    pub fn json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
