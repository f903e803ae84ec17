// src/locator.rs
//! Resolves the project manifest relative to the running executable.
//!
//! The binary is expected at `<root>/target/<profile>/<name>`, so stepping up
//! [`ROOT_LEVELS`] ancestors from the executable lands on the project root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ExtractError, Result};

/// Conventional manifest file name.
pub const MANIFEST_FILE_NAME: &str = "Cargo.toml";

/// Number of ancestors between the executable file and the project root.
pub const ROOT_LEVELS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLocator {
    anchor: PathBuf,
}

impl ManifestLocator {
    /// Locator anchored at an arbitrary file path.
    pub fn new(anchor: impl Into<PathBuf>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    /// Locator anchored at the canonical path of the running executable.
    ///
    /// # Errors
    /// Returns [`ExtractError::CurrentExe`] if the executable path cannot be
    /// determined or canonicalized.
    pub fn from_current_exe() -> Result<Self> {
        let exe = std::env::current_exe()
            .and_then(|p| p.canonicalize())
            .map_err(ExtractError::CurrentExe)?;
        debug!(exe = %exe.display(), "anchoring manifest lookup at executable");
        Ok(Self::new(exe))
    }

    /// Root directory: [`ROOT_LEVELS`] ancestors above the anchor.
    ///
    /// # Errors
    /// Returns [`ExtractError::Locate`] when the anchor is too shallow.
    pub fn root(&self) -> Result<&Path> {
        self.anchor
            .ancestors()
            .nth(ROOT_LEVELS)
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| ExtractError::Locate {
                anchor: self.anchor.clone(),
                levels: ROOT_LEVELS,
            })
    }

    /// Full manifest path. Existence is not checked here.
    ///
    /// # Errors
    /// Returns [`ExtractError::Locate`] when the anchor is too shallow.
    pub fn manifest_path(&self) -> Result<PathBuf> {
        let path = self.root()?.join(MANIFEST_FILE_NAME);
        debug!(manifest = %path.display(), "resolved manifest path");
        Ok(path)
    }
}
