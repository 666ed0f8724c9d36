//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Global flags (--config, --theme, --json, --verbose) are inherited by all
//! subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// layout-merge - inspect merged layouts and file resolution of a storefront
#[derive(Parser, Debug)]
#[command(name = "layout-merge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./layout-merge.toml, then the user config)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Theme code (defaults to the configured theme)
    #[arg(short, long, global = true)]
    pub theme: Option<String>,

    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge the layout updates of the given handles
    Merge {
        /// Layout handles, in merge order
        #[arg(required = true)]
        handles: Vec<String>,

        /// Page handle candidates; registered ones are added after the handles
        #[arg(long = "page", value_name = "HANDLE")]
        pages: Vec<String>,

        /// Pretty-print the merged document
        #[arg(long)]
        pretty: bool,
    },

    /// Print the aggregated file layout document of the theme
    Files,

    /// List containers of the merged layout
    Containers {
        #[arg(required = true)]
        handles: Vec<String>,
    },

    /// List design abstractions declared by layout files
    Abstractions,

    /// Show the page handle hierarchy, or the ancestors of one page handle
    PageHandles {
        /// Page handle whose ancestors are printed, root first
        #[arg(long)]
        parents: Option<String>,
    },

    /// Print the cache key of a handle list
    Key {
        #[arg(required = true)]
        handles: Vec<String>,
    },

    /// Resolve a theme file through the fallback strategy
    Resolve {
        /// File path relative to the theme or module view directory
        file: String,

        /// Owning module (`Vendor_Module`)
        #[arg(short, long)]
        module: Option<String>,

        /// Locale for locale and view files
        #[arg(short, long, default_value = "en_US")]
        locale: String,

        #[arg(short, long, value_enum, default_value_t = ResolveKind::File)]
        kind: ResolveKind,
    },

    /// Manage the merged layout cache
    Cache {
        #[command(subcommand)]
        command: CacheCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheCommand {
    /// Remove cached layouts, all of them or only those merged for a handle
    Clean {
        /// Only remove layouts merged with this handle
        #[arg(long, value_name = "HANDLE")]
        tag: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKind {
    /// Template or other theme file
    File,
    /// Translation file under `i18n/<locale>`
    Locale,
    /// Static view file, locale variants first
    View,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_merge_with_pages() {
        let cli = Cli::try_parse_from([
            "layout-merge",
            "merge",
            "default",
            "catalog_product_view",
            "--page",
            "catalog_product_view_type_simple",
            "--json",
        ])
        .unwrap();

        assert!(cli.json);
        match cli.command {
            Commands::Merge { handles, pages, pretty } => {
                assert_eq!(handles, vec!["default", "catalog_product_view"]);
                assert_eq!(pages, vec!["catalog_product_view_type_simple"]);
                assert!(!pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_merge_requires_handles() {
        assert!(Cli::try_parse_from(["layout-merge", "merge"]).is_err());
    }

    #[test]
    fn cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "layout-merge",
            "files",
            "--theme",
            "Vendor/luma",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.theme.as_deref(), Some("Vendor/luma"));
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Files));
    }

    #[test]
    fn cli_resolve_defaults() {
        let cli = Cli::try_parse_from(["layout-merge", "resolve", "css/styles.css"]).unwrap();
        match cli.command {
            Commands::Resolve {
                file,
                module,
                locale,
                kind,
            } => {
                assert_eq!(file, "css/styles.css");
                assert!(module.is_none());
                assert_eq!(locale, "en_US");
                assert_eq!(kind, ResolveKind::File);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn cli_resolve_view_kind() {
        let cli = Cli::try_parse_from([
            "layout-merge",
            "resolve",
            "js/cart.js",
            "--kind",
            "view",
            "--module",
            "Vendor_Checkout",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Resolve { kind: ResolveKind::View, .. }
        ));
    }

    #[test]
    fn cli_parses_cache_clean() {
        let cli = Cli::try_parse_from(["layout-merge", "cache", "clean", "--tag", "default"]).unwrap();
        match cli.command {
            Commands::Cache {
                command: CacheCommand::Clean { tag },
            } => assert_eq!(tag.as_deref(), Some("default")),
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = Cli::try_parse_from(["layout-merge", "cache", "clean"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Cache {
                command: CacheCommand::Clean { tag: None }
            }
        ));
    }

    #[test]
    fn cli_requires_cache_subcommand() {
        assert!(Cli::try_parse_from(["layout-merge", "cache"]).is_err());
    }
}
