//! Extracts version information from the project `Cargo.toml` for CI.

pub mod app;
pub mod cli;
pub mod error;
pub mod locator;
pub mod logging;
pub mod manifest;
pub mod version;

pub use version::VERSION;
