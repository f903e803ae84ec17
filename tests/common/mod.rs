// tests/common/mod.rs
//! Shared fixtures for binary-level tests.

use std::{
    fs,
    path::{Path, PathBuf},
};

use assert_cmd::Command;
use tempfile::TempDir;

/// A throwaway project tree with the built binary installed at
/// `<root>/target/release/`, so the executable resolves `<root>/Cargo.toml`.
pub struct TempProject {
    dir: TempDir,
    bin: PathBuf,
}

#[allow(dead_code)]
impl TempProject {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin_dir = dir.path().join("target").join("release");
        fs::create_dir_all(&bin_dir).unwrap();

        let built = Path::new(env!("CARGO_BIN_EXE_cargo-info-extractor"));
        let bin = bin_dir.join(built.file_name().unwrap());
        fs::copy(built, &bin).unwrap();

        Self { dir, bin }
    }

    pub fn with_manifest(contents: &str) -> Self {
        let project = Self::new();
        project.write_manifest(contents);
        project
    }

    pub fn with_rust_version(version: &str) -> Self {
        Self::with_manifest(&format!(
            "[package]\nname = \"demo\"\nversion = \"0.1.0\"\nrust-version = \"{version}\"\n"
        ))
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_manifest(&self, contents: &str) {
        fs::write(self.root().join("Cargo.toml"), contents).unwrap();
    }

    pub fn command(&self) -> Command {
        Command::new(&self.bin)
    }
}
