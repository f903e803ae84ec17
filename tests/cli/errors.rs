use predicates::prelude::*;

use crate::common::TempProject;

#[test]
fn no_selection_is_usage_error() {
    TempProject::with_rust_version("1.75")
        .command()
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn both_selections_is_usage_error() {
    TempProject::with_rust_version("1.75")
        .command()
        .args(["--rust-version", "--checks-rust-version"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_manifest_fails() {
    TempProject::new()
        .command()
        .arg("--rust-version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn missing_manifest_fails_for_checks_version_too() {
    TempProject::new()
        .command()
        .arg("--checks-rust-version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn malformed_manifest_fails() {
    for flag in ["--rust-version", "--checks-rust-version"] {
        TempProject::with_manifest("[package\nrust-version = ")
            .command()
            .arg(flag)
            .assert()
            .failure()
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Failed to parse"));
    }
}

#[test]
fn non_string_rust_version_fails() {
    TempProject::with_manifest("[package]\nrust-version = 1.75\n")
        .command()
        .arg("--rust-version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("package.rust-version"));
}

#[test]
fn missing_package_section_fails() {
    TempProject::with_manifest("[workspace]\nmembers = []\n")
        .command()
        .arg("--rust-version")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("package.rust-version"))
        .stderr(predicate::str::contains("missing section"));
}
