// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while locating, reading or querying the manifest.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Cannot locate manifest: {anchor} has fewer than {levels} parent directories")]
    Locate { anchor: PathBuf, levels: usize },

    #[error("Cannot resolve executable path: {0}")]
    CurrentExe(#[source] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path} is not valid UTF-8: {source}")]
    Encoding {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid `{key}` in {path}: {reason}")]
    Schema {
        path: PathBuf,
        key: String,
        reason: String,
    },
}

impl ExtractError {
    pub(crate) fn schema(path: &std::path::Path, key: &str, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.to_path_buf(),
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractError>;
