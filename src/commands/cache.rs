//! `cache` subcommands

use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use layout_merge::presentation::factory;
use layout_merge::presentation::output::write_json;

use super::CommandContext;

/// Without a tag every entry goes, including the aggregated file layouts.
pub fn cmd_cache_clean(ctx: &CommandContext, tag: Option<&str>) -> Result<()> {
    let cache = factory::create_cache(&ctx.config);
    let removed = cache.clean(tag)?;
    info!(removed, tag = tag.unwrap_or("*"), "layout cache cleaned");
    let mut out = io::stdout().lock();

    if ctx.json() {
        let out_json = serde_json::json!({
            "command": "cache clean",
            "tag": tag,
            "removed": removed,
        });
        write_json(&mut out, &out_json)?;
    } else {
        match tag {
            Some(tag) => writeln!(out, "Removed {removed} cached layout(s) tagged '{tag}'")?,
            None => writeln!(out, "Removed {removed} cached layout(s)")?,
        }
    }
    Ok(())
}
