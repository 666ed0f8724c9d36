//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::value_objects::{AppMode, ConfigWarning};
use crate::error::{LayoutError, LayoutResult};

use super::types::Config;

/// Project configuration file name.
pub const CONFIG_FILE: &str = "layout-merge.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
///
/// A relative `base_dir` is resolved against the directory holding the file.
pub fn load_with_warnings(path: &Path) -> LayoutResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| LayoutError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if config.base_dir.is_relative() {
        if let Some(dir) = path.parent() {
            // components() drops `.` segments
            config.base_dir = dir.join(&config.base_dir).components().collect();
        }
    }

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(CONFIG_FILE))
        .into_iter()
        .chain(user_config_path());

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => return with_env_overrides(config),
            Err(e) => warn!(path = %path.display(), error = %e, "skipping unreadable config"),
        }
    }

    with_env_overrides(Config::default())
}

/// `<config dir>/layout-merge/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("layout-merge").join("config.toml"))
}

/// Apply environment variable overrides (LAYOUT_MERGE_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |name| std::env::var(name).ok())
}

pub(crate) fn apply_overrides(mut config: Config, var: impl Fn(&str) -> Option<String>) -> Config {
    // LAYOUT_MERGE_MODE
    if let Some(mode) = var("LAYOUT_MERGE_MODE") {
        match mode.parse::<AppMode>() {
            Ok(mode) => config.mode = mode,
            Err(e) => warn!(error = %e, "ignoring LAYOUT_MERGE_MODE"),
        }
    }

    // LAYOUT_MERGE_INSTALLED
    if let Some(installed) = var("LAYOUT_MERGE_INSTALLED") {
        match installed.trim().to_lowercase().as_str() {
            "1" | "true" | "yes" => config.installed = true,
            "0" | "false" | "no" => config.installed = false,
            other => warn!(value = other, "ignoring LAYOUT_MERGE_INSTALLED"),
        }
    }

    // LAYOUT_MERGE_BASE_DIR
    if let Some(dir) = var("LAYOUT_MERGE_BASE_DIR") {
        if !dir.is_empty() {
            config.base_dir = PathBuf::from(dir);
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "base_dir",
        "mode",
        "installed",
        "area",
        "theme",
        "themes",
        "id",
        "code",
        "parent",
        "physical",
        "store",
        "base_url",
        "secure_base_url",
        "cache",
        "backend",
        "dir",
        "updates",
        "path",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
