//! Fallback file resolution
//!
//! Walks candidate directories on every call: the theme inheritance chain
//! (nearest first), then the owning module, then the shared library. The
//! first existing candidate wins; when none exists the last candidate is
//! returned so callers get a stable path to report.

use std::path::{Path, PathBuf};

use crate::domain::entities::Theme;
use crate::domain::ports::FileResolution;

#[derive(Debug, Clone)]
pub struct Fallback {
    base_dir: PathBuf,
}

impl Fallback {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn theme_dir(&self, area: &str, theme: &Theme) -> PathBuf {
        self.base_dir
            .join("app")
            .join("design")
            .join(area)
            .join(theme.code())
    }

    /// `Vendor_Module` → `app/code/Vendor/Module/view/<area>`.
    fn module_view_dir(&self, area: &str, module: &str) -> PathBuf {
        let (vendor, name) = module.split_once('_').unwrap_or(("", module));
        self.base_dir
            .join("app")
            .join("code")
            .join(vendor)
            .join(name)
            .join("view")
            .join(area)
    }

    pub(crate) fn file_candidates(
        &self,
        area: &str,
        theme: &Theme,
        file: &str,
        module: Option<&str>,
    ) -> Vec<PathBuf> {
        let mut candidates: Vec<PathBuf> = theme
            .inheritance()
            .into_iter()
            .map(|t| {
                let dir = self.theme_dir(area, t);
                match module {
                    Some(module) => dir.join(module).join(file),
                    None => dir.join(file),
                }
            })
            .collect();
        if let Some(module) = module {
            candidates.push(self.module_view_dir(area, module).join(file));
        }
        candidates
    }

    pub(crate) fn locale_candidates(
        &self,
        area: &str,
        theme: &Theme,
        locale: &str,
        file: &str,
    ) -> Vec<PathBuf> {
        theme
            .inheritance()
            .into_iter()
            .map(|t| self.theme_dir(area, t).join("i18n").join(locale).join(file))
            .collect()
    }

    pub(crate) fn view_candidates(
        &self,
        area: &str,
        theme: &Theme,
        locale: &str,
        file: &str,
        module: Option<&str>,
    ) -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        for t in theme.inheritance() {
            let dir = self.theme_dir(area, t);
            let scoped = match module {
                Some(module) => dir.join(module),
                None => dir,
            };
            candidates.push(scoped.join("i18n").join(locale).join(file));
            candidates.push(scoped.join(file));
        }
        match module {
            Some(module) => {
                let dir = self.module_view_dir(area, module);
                candidates.push(dir.join("i18n").join(locale).join(file));
                candidates.push(dir.join(file));
            }
            None => candidates.push(self.base_dir.join("pub").join("lib").join(file)),
        }
        candidates
    }
}

impl FileResolution for Fallback {
    fn file(&self, area: &str, theme: &Theme, file: &str, module: Option<&str>) -> PathBuf {
        first_existing(self.file_candidates(area, theme, file, module))
    }

    fn locale_file(&self, area: &str, theme: &Theme, locale: &str, file: &str) -> PathBuf {
        first_existing(self.locale_candidates(area, theme, locale, file))
    }

    fn view_file(
        &self,
        area: &str,
        theme: &Theme,
        locale: &str,
        file: &str,
        module: Option<&str>,
    ) -> PathBuf {
        first_existing(self.view_candidates(area, theme, locale, file, module))
    }
}

fn first_existing(candidates: Vec<PathBuf>) -> PathBuf {
    let mut last = PathBuf::new();
    for candidate in candidates {
        if candidate.exists() {
            return candidate;
        }
        last = candidate;
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    fn child_theme() -> Theme {
        Theme::new(2, "frontend", "Vendor/child")
            .with_parent(Theme::new(1, "frontend", "Vendor/blank"))
    }

    #[test]
    fn file_prefers_nearest_theme() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "app/design/frontend/Vendor/blank/Vendor_Catalog/templates/view.phtml");
        let child = touch(dir.path(), "app/design/frontend/Vendor/child/Vendor_Catalog/templates/view.phtml");

        let resolved = Fallback::new(dir.path()).file(
            "frontend",
            &child_theme(),
            "templates/view.phtml",
            Some("Vendor_Catalog"),
        );
        assert_eq!(resolved, child);
    }

    #[test]
    fn file_falls_back_to_parent_then_module() {
        let dir = tempdir().unwrap();
        let module = touch(dir.path(), "app/code/Vendor/Catalog/view/frontend/templates/list.phtml");

        let fallback = Fallback::new(dir.path());
        let resolved = fallback.file("frontend", &child_theme(), "templates/list.phtml", Some("Vendor_Catalog"));
        assert_eq!(resolved, module);

        let parent = touch(dir.path(), "app/design/frontend/Vendor/blank/Vendor_Catalog/templates/list.phtml");
        let resolved = fallback.file("frontend", &child_theme(), "templates/list.phtml", Some("Vendor_Catalog"));
        assert_eq!(resolved, parent);
    }

    #[test]
    fn missing_file_resolves_to_last_candidate() {
        let dir = tempdir().unwrap();
        let resolved = Fallback::new(dir.path()).file("frontend", &child_theme(), "missing.phtml", None);
        assert_eq!(resolved, dir.path().join("app/design/frontend/Vendor/blank/missing.phtml"));
    }

    #[test]
    fn locale_file_walks_theme_chain() {
        let dir = tempdir().unwrap();
        let parent = touch(dir.path(), "app/design/frontend/Vendor/blank/i18n/en_US/translate.csv");

        let resolved = Fallback::new(dir.path()).locale_file("frontend", &child_theme(), "en_US", "translate.csv");
        assert_eq!(resolved, parent);
    }

    #[test]
    fn view_file_prefers_localized_variant() {
        let dir = tempdir().unwrap();
        touch(dir.path(), "app/design/frontend/Vendor/child/css/styles.css");
        let localized = touch(dir.path(), "app/design/frontend/Vendor/child/i18n/de_DE/css/styles.css");

        let resolved = Fallback::new(dir.path()).view_file("frontend", &child_theme(), "de_DE", "css/styles.css", None);
        assert_eq!(resolved, localized);
    }

    #[test]
    fn view_file_without_module_ends_in_shared_library() {
        let dir = tempdir().unwrap();
        let lib = touch(dir.path(), "pub/lib/jquery.js");

        let resolved = Fallback::new(dir.path()).view_file("frontend", &child_theme(), "en_US", "jquery.js", None);
        assert_eq!(resolved, lib);
    }
}
