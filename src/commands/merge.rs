//! Merge, containers and key command handlers

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::warn;

use layout_merge::domain::services::LayoutMerge;
use layout_merge::presentation::output::{write_json, write_labels};

use super::CommandContext;

/// Build an engine with `handles` (and any registered page handles) loaded.
fn load_merge(ctx: &CommandContext, handles: &[String], pages: &[String]) -> Result<LayoutMerge> {
    let mut merge = ctx.layout_merge()?;
    merge.add_handles(handles.iter().cloned());
    if !pages.is_empty() && !merge.add_page_handles(pages)? {
        warn!(candidates = ?pages, "no registered page handle among candidates");
    }
    merge.load().context("failed to load merged layout")?;
    Ok(merge)
}

pub fn cmd_merge(
    ctx: &CommandContext,
    handles: &[String],
    pages: &[String],
    pretty: bool,
) -> Result<()> {
    let merge = load_merge(ctx, handles, pages)?;
    let mut out = io::stdout().lock();

    if ctx.json() {
        let out_json = serde_json::json!({
            "command": "merge",
            "theme": merge.theme().code(),
            "store": merge.store().id(),
            "handles": merge.handles(),
            "page_handles": merge.page_handles(),
            "cache_key": merge.cache_key().as_str(),
            "layout": merge.as_string(),
        });
        write_json(&mut out, &out_json)?;
        return Ok(());
    }

    if pretty {
        let document = merge.as_document()?;
        write!(out, "{}", document.to_pretty_xml())?;
    } else {
        writeln!(out, "{}", merge.as_string())?;
    }
    Ok(())
}

pub fn cmd_containers(ctx: &CommandContext, handles: &[String]) -> Result<()> {
    let merge = load_merge(ctx, handles, &[])?;
    let containers = merge.containers()?;
    let mut out = io::stdout().lock();

    if ctx.json() {
        write_json(&mut out, &containers)?;
    } else {
        write_labels(&mut out, &containers)?;
    }
    Ok(())
}

/// The key only depends on scope and handles; nothing is loaded.
pub fn cmd_key(ctx: &CommandContext, handles: &[String]) -> Result<()> {
    let mut merge = ctx.layout_merge()?;
    merge.add_handles(handles.iter().cloned());
    let key = merge.cache_key();
    let mut out = io::stdout().lock();

    if ctx.json() {
        let out_json = serde_json::json!({
            "command": "key",
            "handles": merge.handles(),
            "key": key.as_str(),
        });
        write_json(&mut out, &out_json)?;
    } else {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
