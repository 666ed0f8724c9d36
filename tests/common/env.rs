//! Isolated storefront tree for tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

pub const CONFIG_FILE: &str = "layout-merge.toml";

const ENV_OVERRIDES: [&str; 3] = [
    "LAYOUT_MERGE_MODE",
    "LAYOUT_MERGE_INSTALLED",
    "LAYOUT_MERGE_BASE_DIR",
];

/// A storefront base directory with `app/code`, `app/design` and `var`.
pub struct Storefront {
    dir: TempDir,
}

impl Storefront {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// `module` is `Vendor_Module`; the file lands in
    /// `app/code/Vendor/Module/view/<area>/layout/<handle>.xml`.
    pub fn module_layout(&self, module: &str, area: &str, handle: &str, xml: &str) -> PathBuf {
        let (vendor, name) = module.split_once('_').unwrap();
        self.write(
            &format!("app/code/{vendor}/{name}/view/{area}/layout/{handle}.xml"),
            xml,
        )
    }

    /// Frontend theme override in `app/design/frontend/<theme>/<module>/layout`.
    pub fn theme_layout(&self, theme: &str, module: &str, handle: &str, xml: &str) -> PathBuf {
        self.write(
            &format!("app/design/frontend/{theme}/{module}/layout/{handle}.xml"),
            xml,
        )
    }

    pub fn config(&self, toml: &str) -> PathBuf {
        self.write(CONFIG_FILE, toml)
    }

    /// Run the binary against this storefront's configuration.
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_layout-merge"));
        cmd.current_dir(self.root())
            .arg("--config")
            .arg(self.path(CONFIG_FILE))
            .args(args);
        for var in ENV_OVERRIDES {
            cmd.env_remove(var);
        }
        cmd.env_remove("RUST_LOG");
        cmd.output().unwrap()
    }

    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "layout-merge {:?} failed:\n{}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).unwrap()
    }
}

impl Default for Storefront {
    fn default() -> Self {
        Self::new()
    }
}
