//! Directory File Source
//!
//! Lists layout files under a storefront base directory:
//!
//! ```text
//! app/code/<Vendor>/<Module>/view/base/layout/*.xml      (base files)
//! app/code/<Vendor>/<Module>/view/<area>/layout/*.xml    (base files)
//! app/design/<area>/<Vendor>/<theme>/<Vendor_Module>/layout/*.xml
//! ```
//!
//! Base files come first, then theme files from the root ancestor down to
//! the requested theme. Entries are sorted by path within each directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::entities::{LayoutFile, Theme};
use crate::domain::ports::{FileSource, FileSourceError, FileSourceResult};

const SHARED_AREA: &str = "base";

#[derive(Debug, Clone)]
pub struct DirectoryFileSource {
    base_dir: PathBuf,
}

impl DirectoryFileSource {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn module_files(&self, area: &str) -> FileSourceResult<Vec<LayoutFile>> {
        let code_dir = self.base_dir.join("app").join("code");
        let mut files = Vec::new();

        for vendor_dir in subdirectories(&code_dir)? {
            for module_dir in subdirectories(&vendor_dir)? {
                let module = module_name(&vendor_dir, &module_dir);
                let mut areas = vec![SHARED_AREA];
                if area != SHARED_AREA {
                    areas.push(area);
                }
                for view_area in areas {
                    let layout_dir = module_dir.join("view").join(view_area).join("layout");
                    files.extend(
                        xml_files(&layout_dir)?
                            .into_iter()
                            .map(|path| LayoutFile::new(path, module.clone())),
                    );
                }
            }
        }
        Ok(files)
    }

    fn theme_files(&self, theme: &Theme) -> FileSourceResult<Vec<LayoutFile>> {
        let theme_dir = self
            .base_dir
            .join("app")
            .join("design")
            .join(theme.area())
            .join(theme.code());
        let mut files = Vec::new();

        for module_dir in subdirectories(&theme_dir)? {
            let Some(module) = module_dir.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if !module.contains('_') {
                continue;
            }
            files.extend(
                xml_files(&module_dir.join("layout"))?
                    .into_iter()
                    .map(|path| LayoutFile::new(path, module).with_theme(theme.code())),
            );
        }
        Ok(files)
    }
}

impl FileSource for DirectoryFileSource {
    fn files(&self, theme: &Theme) -> FileSourceResult<Vec<LayoutFile>> {
        let mut files = self.module_files(theme.area())?;
        for ancestor in theme.inheritance().into_iter().rev() {
            if ancestor.is_physical() {
                files.extend(self.theme_files(ancestor)?);
            }
        }
        Ok(files)
    }
}

fn module_name(vendor_dir: &Path, module_dir: &Path) -> String {
    let name = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    };
    format!("{}_{}", name(vendor_dir), name(module_dir))
}

/// Sorted entries of `dir`; a missing directory has none.
fn sorted_entries(dir: &Path) -> FileSourceResult<Vec<PathBuf>> {
    let unreadable = |e: io::Error| FileSourceError::DirectoryUnreadable {
        path: dir.to_path_buf(),
        message: e.to_string(),
    };

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(unreadable(e)),
    };

    let mut paths = Vec::new();
    for entry in entries {
        paths.push(entry.map_err(unreadable)?.path());
    }
    paths.sort();
    Ok(paths)
}

fn subdirectories(dir: &Path) -> FileSourceResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_dir())
        .collect())
}

fn xml_files(dir: &Path) -> FileSourceResult<Vec<PathBuf>> {
    Ok(sorted_entries(dir)?
        .into_iter()
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "xml"))
        .collect())
}
