//! Resolve command handler

use std::io::{self, Write};

use anyhow::Result;

use layout_merge::presentation::factory::create_strategy_pool;
use layout_merge::presentation::output::write_json;
use layout_merge::presentation::ResolveKind;

use super::CommandContext;

pub fn cmd_resolve(
    ctx: &CommandContext,
    file: &str,
    module: Option<&str>,
    locale: &str,
    kind: ResolveKind,
) -> Result<()> {
    let theme = ctx.config.theme(ctx.theme.as_deref())?;
    let area = theme.area().to_string();
    let pool = create_strategy_pool(&ctx.config);

    let resolved = match kind {
        ResolveKind::File => pool.file_strategy().file(&area, &theme, file, module),
        ResolveKind::Locale => pool.locale_strategy().locale_file(&area, &theme, locale, file),
        ResolveKind::View => pool
            .view_strategy()
            .view_file(&area, &theme, locale, file, module),
    };
    let exists = resolved.exists();
    let mut out = io::stdout().lock();

    if ctx.json() {
        let out_json = serde_json::json!({
            "command": "resolve",
            "strategy": pool.kind().as_str(),
            "path": resolved.display().to_string(),
            "exists": exists,
        });
        write_json(&mut out, &out_json)?;
    } else if exists {
        writeln!(out, "{}", resolved.display())?;
    } else {
        writeln!(out, "{} (missing)", resolved.display())?;
    }
    Ok(())
}
