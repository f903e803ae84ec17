// src/manifest.rs
//! Read-only view over a parsed `Cargo.toml`.

use std::path::{Path, PathBuf};

use toml::{Table, Value};
use tracing::{debug, trace};

use crate::error::{ExtractError, Result};

#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    root: Table,
}

impl Manifest {
    /// Reads and parses the manifest at `path`.
    ///
    /// # Errors
    /// I/O failures, non-UTF-8 content and TOML syntax errors are all fatal.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|source| ExtractError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(manifest = %path.display(), bytes = bytes.len(), "read manifest");
        Self::from_bytes(path, &bytes)
    }

    /// Parses raw manifest bytes; `path` is only used for diagnostics.
    ///
    /// # Errors
    /// See [`Manifest::load`].
    pub fn from_bytes(path: &Path, bytes: &[u8]) -> Result<Self> {
        let text = std::str::from_utf8(bytes).map_err(|source| ExtractError::Encoding {
            path: path.to_path_buf(),
            source,
        })?;
        let root = text.parse::<Table>().map_err(|source| ExtractError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        trace!(keys = root.len(), "parsed manifest");
        Ok(Self {
            path: path.to_path_buf(),
            root,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Looks up `section.key` and requires it to be a string.
    ///
    /// # Errors
    /// [`ExtractError::Schema`] when the section or key is missing or has the
    /// wrong type.
    pub fn section_str(&self, section: &str, key: &str) -> Result<&str> {
        let dotted = format!("{section}.{key}");
        let table = match self.root.get(section) {
            Some(Value::Table(table)) => table,
            Some(other) => {
                return Err(ExtractError::schema(
                    &self.path,
                    &dotted,
                    format!("expected a table, found {}", other.type_str()),
                ));
            }
            None => return Err(ExtractError::schema(&self.path, &dotted, "missing section")),
        };
        match table.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(ExtractError::schema(
                &self.path,
                &dotted,
                format!("expected a string, found {}", other.type_str()),
            )),
            None => Err(ExtractError::schema(&self.path, &dotted, "missing field")),
        }
    }
}
