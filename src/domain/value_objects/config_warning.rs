//! Configuration warning value object.

use std::fmt;
use std::path::PathBuf;

/// Non-fatal problem found while reading `layout-merge.toml`
/// (for example an unknown or misspelled key).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// Last segment of the unknown key path
    pub key: String,
    pub file: PathBuf,
    /// 1-indexed line of the first occurrence, when it can be located
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_suggestion() {
        let warning = ConfigWarning {
            key: "instaled".to_string(),
            file: PathBuf::from("layout-merge.toml"),
            line: Some(3),
            suggestion: Some("installed".to_string()),
        };
        assert_eq!(
            warning.to_string(),
            "unknown key 'instaled' in layout-merge.toml:3 (did you mean 'installed'?)"
        );
    }
}
