//! Caching proxy over [`Fallback`]
//!
//! Resolved paths are memoized in one map per `(area, theme, locale)` and
//! persisted as JSON under the map directory, so later processes skip the
//! directory walk. Paths inside the base directory are stored relative to it.
//!
//! Maps are written back by [`CachingProxy::persist`] and on drop.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::fallback::Fallback;
use crate::domain::entities::Theme;
use crate::domain::ports::FileResolution;
use crate::infrastructure::fs::atomic_write;

#[derive(Debug, Default)]
struct Section {
    entries: BTreeMap<String, String>,
    dirty: bool,
}

#[derive(Debug)]
pub struct CachingProxy {
    fallback: Fallback,
    map_dir: PathBuf,
    sections: Mutex<HashMap<String, Section>>,
}

impl CachingProxy {
    pub fn new(fallback: Fallback, map_dir: impl Into<PathBuf>) -> Self {
        Self {
            fallback,
            map_dir: map_dir.into(),
            sections: Mutex::new(HashMap::new()),
        }
    }

    pub fn map_dir(&self) -> &Path {
        &self.map_dir
    }

    fn sections(&self) -> MutexGuard<'_, HashMap<String, Section>> {
        self.sections.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Write every modified map to disk.
    pub fn persist(&self) -> io::Result<()> {
        let mut sections = self.sections();
        for (name, section) in sections.iter_mut().filter(|(_, s)| s.dirty) {
            let content = serde_json::to_string_pretty(&section.entries)?;
            atomic_write(&self.map_path(name), content.as_bytes())?;
            section.dirty = false;
            debug!(map = %name, entries = section.entries.len(), "fallback map persisted");
        }
        Ok(())
    }

    fn map_path(&self, section: &str) -> PathBuf {
        self.map_dir.join(format!("{section}.json"))
    }

    fn load_section(&self, name: &str) -> Section {
        let path = self.map_path(name);
        let entries = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
                warn!(path = %path.display(), error = %e, "ignoring corrupted fallback map");
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        Section {
            entries,
            dirty: false,
        }
    }

    fn resolve(
        &self,
        section: String,
        key: String,
        resolve: impl FnOnce() -> PathBuf,
    ) -> PathBuf {
        let mut sections = self.sections();
        let section = sections
            .entry(section)
            .or_insert_with_key(|name| self.load_section(name));

        if let Some(stored) = section.entries.get(&key) {
            return self.absolute(stored);
        }

        let resolved = resolve();
        section.entries.insert(key, self.relative(&resolved));
        section.dirty = true;
        resolved
    }

    fn relative(&self, path: &Path) -> String {
        path.strip_prefix(self.fallback.base_dir())
            .unwrap_or(path)
            .to_string_lossy()
            .into_owned()
    }

    fn absolute(&self, stored: &str) -> PathBuf {
        let path = Path::new(stored);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.fallback.base_dir().join(path)
        }
    }
}

fn section_name(area: &str, theme: &Theme, locale: &str) -> String {
    let theme = theme.code().replace(['/', '\\'], "_");
    if locale.is_empty() {
        format!("{area}_{theme}")
    } else {
        format!("{area}_{theme}_{locale}")
    }
}

fn entry_key(kind: &str, module: Option<&str>, file: &str) -> String {
    format!("{kind}|{}|{file}", module.unwrap_or_default())
}

impl FileResolution for CachingProxy {
    fn file(&self, area: &str, theme: &Theme, file: &str, module: Option<&str>) -> PathBuf {
        self.resolve(
            section_name(area, theme, ""),
            entry_key("file", module, file),
            || self.fallback.file(area, theme, file, module),
        )
    }

    fn locale_file(&self, area: &str, theme: &Theme, locale: &str, file: &str) -> PathBuf {
        self.resolve(
            section_name(area, theme, locale),
            entry_key("locale", None, file),
            || self.fallback.locale_file(area, theme, locale, file),
        )
    }

    fn view_file(
        &self,
        area: &str,
        theme: &Theme,
        locale: &str,
        file: &str,
        module: Option<&str>,
    ) -> PathBuf {
        self.resolve(
            section_name(area, theme, locale),
            entry_key("view", module, file),
            || self.fallback.view_file(area, theme, locale, file, module),
        )
    }
}

impl Drop for CachingProxy {
    fn drop(&mut self) {
        if let Err(e) = self.persist() {
            warn!(dir = %self.map_dir.display(), error = %e, "failed to persist fallback maps");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn theme() -> Theme {
        Theme::new(1, "frontend", "Vendor/blank")
    }

    fn touch(root: &Path, rel: &str) -> PathBuf {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
        path
    }

    #[test]
    fn resolved_path_is_memoized() {
        let dir = tempdir().unwrap();
        let original = touch(dir.path(), "app/design/frontend/Vendor/blank/Vendor_Cms/templates/page.phtml");
        let proxy = CachingProxy::new(Fallback::new(dir.path()), dir.path().join("var/maps/fallback"));

        let first = proxy.file("frontend", &theme(), "templates/page.phtml", Some("Vendor_Cms"));
        assert_eq!(first, original);

        fs::remove_file(&original).unwrap();
        let second = proxy.file("frontend", &theme(), "templates/page.phtml", Some("Vendor_Cms"));
        assert_eq!(second, original);
    }

    #[test]
    fn maps_persist_relative_paths_and_reload() {
        let dir = tempdir().unwrap();
        let map_dir = dir.path().join("var/maps/fallback");
        let original = touch(dir.path(), "app/design/frontend/Vendor/blank/i18n/en_US/translate.csv");

        {
            let proxy = CachingProxy::new(Fallback::new(dir.path()), &map_dir);
            proxy.locale_file("frontend", &theme(), "en_US", "translate.csv");
        }

        let map = fs::read_to_string(map_dir.join("frontend_Vendor_blank_en_US.json")).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&map).unwrap();
        assert_eq!(
            entries.get("locale||translate.csv").map(String::as_str),
            Some("app/design/frontend/Vendor/blank/i18n/en_US/translate.csv")
        );

        fs::remove_file(&original).unwrap();
        let proxy = CachingProxy::new(Fallback::new(dir.path()), &map_dir);
        assert_eq!(proxy.locale_file("frontend", &theme(), "en_US", "translate.csv"), original);
    }

    #[test]
    fn corrupted_map_is_ignored() {
        let dir = tempdir().unwrap();
        let map_dir = dir.path().join("maps");
        touch(&map_dir, "frontend_Vendor_blank.json");
        fs::write(map_dir.join("frontend_Vendor_blank.json"), "{not json").unwrap();
        let lib = touch(dir.path(), "app/design/frontend/Vendor/blank/web/logo.svg");

        let proxy = CachingProxy::new(Fallback::new(dir.path()), &map_dir);
        assert_eq!(proxy.file("frontend", &theme(), "web/logo.svg", None), lib);
    }

    #[test]
    fn persist_is_noop_without_changes() {
        let dir = tempdir().unwrap();
        let map_dir = dir.path().join("maps");
        let proxy = CachingProxy::new(Fallback::new(dir.path()), &map_dir);
        proxy.persist().unwrap();
        assert!(!map_dir.exists());
    }
}
