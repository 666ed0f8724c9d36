//! layout-merge CLI
//!
//! Usage: layout-merge [OPTIONS] <COMMAND>
//!
//! Commands:
//!   merge         Merge the layout updates of the given handles
//!   files         Print the aggregated file layout document
//!   containers    List containers of the merged layout
//!   abstractions  List design abstractions
//!   page-handles  Show the page handle hierarchy
//!   key           Print the cache key of a handle list
//!   resolve       Resolve a theme file through the fallback strategy
//!   cache clean   Remove cached layouts

mod commands;

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use layout_merge::config::{Config, CONFIG_FILE};
use layout_merge::presentation::{CacheCommand, Cli, Commands, OutputFormat};

use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;
    let ctx = CommandContext {
        config,
        theme: cli.theme,
        format: OutputFormat::from_flag(cli.json),
    };

    match cli.command {
        Commands::Merge {
            handles,
            pages,
            pretty,
        } => commands::merge::cmd_merge(&ctx, &handles, &pages, pretty),
        Commands::Files => commands::inspect::cmd_files(&ctx),
        Commands::Containers { handles } => commands::merge::cmd_containers(&ctx, &handles),
        Commands::Abstractions => commands::inspect::cmd_abstractions(&ctx),
        Commands::PageHandles { parents } => {
            commands::inspect::cmd_page_handles(&ctx, parents.as_deref())
        }
        Commands::Key { handles } => commands::merge::cmd_key(&ctx, &handles),
        Commands::Resolve {
            file,
            module,
            locale,
            kind,
        } => commands::resolve::cmd_resolve(&ctx, &file, module.as_deref(), &locale, kind),
        Commands::Cache {
            command: CacheCommand::Clean { tag },
        } => commands::cache::cmd_cache_clean(&ctx, tag.as_deref()),
    }
}

/// `RUST_LOG` wins; otherwise `-v` raises the level from warnings.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

/// An explicit `--config` must load; otherwise fall back to the project
/// file, the user file, then defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = explicit else {
        let cwd = std::env::current_dir().context("cannot read current directory")?;
        let project = cwd.join(CONFIG_FILE);
        if project.exists() {
            return load_config(Some(&project));
        }
        return Ok(Config::load_or_default(None));
    };

    let (config, warnings) = Config::load_with_warnings(path)
        .with_context(|| format!("failed to load {}", path.display()))?;
    for warning in &warnings {
        eprintln!("warning: {warning}");
    }
    Ok(config.with_env_overrides())
}
