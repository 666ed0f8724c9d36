//! File layout inspection: files, abstractions, page-handles

use std::io::{self, Write};

use anyhow::Result;

use layout_merge::presentation::output::{write_abstractions, write_hierarchy, write_json};

use super::CommandContext;

pub fn cmd_files(ctx: &CommandContext) -> Result<()> {
    let merge = ctx.layout_merge()?;
    let document = merge.file_layout_updates_xml()?;
    let mut out = io::stdout().lock();

    if ctx.json() {
        let out_json = serde_json::json!({
            "command": "files",
            "theme": merge.theme().code(),
            "layout": document.to_xml(),
        });
        write_json(&mut out, &out_json)?;
    } else {
        write!(out, "{}", document.root().to_pretty_xml())?;
    }
    Ok(())
}

pub fn cmd_abstractions(ctx: &CommandContext) -> Result<()> {
    let merge = ctx.layout_merge()?;
    let abstractions = merge.all_design_abstractions()?;
    let mut out = io::stdout().lock();

    if ctx.json() {
        write_json(&mut out, &abstractions)?;
    } else {
        write_abstractions(&mut out, &abstractions)?;
    }
    Ok(())
}

pub fn cmd_page_handles(ctx: &CommandContext, parents_of: Option<&str>) -> Result<()> {
    let merge = ctx.layout_merge()?;
    let mut out = io::stdout().lock();

    if let Some(name) = parents_of {
        let parents = merge.page_handle_parents(name)?;
        if ctx.json() {
            write_json(&mut out, &parents)?;
        } else {
            for parent in &parents {
                writeln!(out, "{parent}")?;
            }
        }
        return Ok(());
    }

    let hierarchy = merge.page_handles_hierarchy()?;
    if ctx.json() {
        write_json(&mut out, &hierarchy)?;
    } else {
        write_hierarchy(&mut out, &hierarchy)?;
    }
    Ok(())
}
