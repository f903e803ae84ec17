// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::{Args, Selection};
use crate::locator::ManifestLocator;
use crate::manifest::Manifest;
use crate::version;

/// Computes the line to print for `selection`.
///
/// The manifest is always loaded first, so an unreadable or malformed
/// manifest fails even for [`Selection::ChecksRustVersion`].
///
/// # Errors
/// Propagates locator, I/O, parse and schema errors.
pub fn resolve(locator: &ManifestLocator, selection: Selection) -> Result<String> {
    let path = locator.manifest_path()?;
    let manifest = Manifest::load(&path).context("failed to load project manifest")?;
    info!(manifest = %manifest.path().display(), ?selection, "dispatching");

    let value = match selection {
        Selection::RustVersion => {
            version::rust_version(&manifest).context("failed to extract Rust version")?
        }
        Selection::ChecksRustVersion => version::checks_rust_version().to_string(),
    };
    debug!(%value, "resolved");
    Ok(value)
}

/// Writes `value` followed by a single newline.
///
/// # Errors
/// Fails if the writer fails.
pub fn emit(out: &mut impl Write, value: &str) -> Result<()> {
    writeln!(out, "{value}").context("failed to write output")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

/// Runs one invocation against the manifest next to the running executable.
///
/// # Errors
/// Any failure is terminal.
pub fn run(args: &Args) -> Result<()> {
    let locator = ManifestLocator::from_current_exe()?;
    let value = resolve(&locator, args.selection())?;
    emit(&mut std::io::stdout().lock(), &value)
}
