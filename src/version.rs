// src/version.rs
//! Version strings printed for CI.

use crate::error::Result;
use crate::manifest::Manifest;

/// Version of this tool, derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Toolchain used by the checks pipeline (lints, formatting). Maintained
/// independently of the manifest's `rust-version`.
pub const CHECKS_RUST_VERSION: &str = "1.88.0";

/// Reads `package.rust-version` and normalizes it with [`normalize`].
///
/// # Errors
/// Fails when the field is missing or not a string.
pub fn rust_version(manifest: &Manifest) -> Result<String> {
    manifest
        .section_str("package", "rust-version")
        .map(normalize)
}

/// Pads `MAJOR.MINOR` to `MAJOR.MINOR.0`. Any other component count is
/// returned as is.
pub fn normalize(version: &str) -> String {
    if version.split('.').count() == 2 {
        format!("{version}.0")
    } else {
        version.to_string()
    }
}

pub const fn checks_rust_version() -> &'static str {
    CHECKS_RUST_VERSION
}
