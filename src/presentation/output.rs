//! Output Rendering
//!
//! Text for humans, one JSON document per command for scripting.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::domain::entities::{DesignAbstraction, PageHandleNode};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Write `value` as pretty JSON followed by a newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

/// `name<TAB>label` per line, sorted by name.
pub fn write_labels<W: Write>(out: &mut W, entries: &BTreeMap<String, String>) -> io::Result<()> {
    for (name, label) in entries {
        if label.is_empty() {
            writeln!(out, "{name}")?;
        } else {
            writeln!(out, "{name}\t{label}")?;
        }
    }
    Ok(())
}

pub fn write_abstractions<W: Write>(
    out: &mut W,
    entries: &BTreeMap<String, DesignAbstraction>,
) -> io::Result<()> {
    for entry in entries.values() {
        let kind = entry
            .design_abstraction
            .map(|kind| kind.as_str())
            .unwrap_or("-");
        writeln!(out, "{}\t{}\t{}", entry.name, kind, entry.label)?;
    }
    Ok(())
}

/// Indented tree, two spaces per level.
pub fn write_hierarchy<W: Write>(out: &mut W, nodes: &[PageHandleNode]) -> io::Result<()> {
    fn walk<W: Write>(out: &mut W, nodes: &[PageHandleNode], depth: usize) -> io::Result<()> {
        for node in nodes {
            let indent = "  ".repeat(depth);
            if node.label.is_empty() {
                writeln!(out, "{indent}{}", node.name)?;
            } else {
                writeln!(out, "{indent}{} ({})", node.name, node.label)?;
            }
            walk(out, &node.children, depth + 1)?;
        }
        Ok(())
    }
    walk(out, nodes, 0)
}
