// src/cli.rs
use clap::{ArgAction, Parser};

/// What to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// `package.rust-version` from the project manifest.
    RustVersion,
    /// Fixed toolchain version for the checks pipeline.
    ChecksRustVersion,
}

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "cargo-info-extractor",
    version = crate::version::VERSION,
    about = "Extracts certain info from the project Cargo.toml and prints it to stdout",
    group(
        clap::ArgGroup::new("selection")
            .args(["rust_version", "checks_rust_version"])
            .required(true)
            .multiple(false)
    )
)]
pub struct Args {
    /// Extract the Rust version (`package.rust-version`, padded to MAJOR.MINOR.PATCH)
    #[arg(long)]
    pub rust_version: bool,

    /// Print the Rust toolchain version used by the checks pipeline
    #[arg(long)]
    pub checks_rust_version: bool,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn selection(&self) -> Selection {
        if self.checks_rust_version {
            Selection::ChecksRustVersion
        } else {
            Selection::RustVersion
        }
    }
}
