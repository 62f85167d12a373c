pub mod tasks;

use std::{
    path::{Path, PathBuf},
    process::Command,
};

pub type DynError = Box<dyn std::error::Error>;

pub fn project_root() -> PathBuf {
    Path::new(&env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(1)
        .unwrap()
        .to_path_buf()
}

pub fn check_nextest_exists() -> Result<(), DynError> {
    check_cargo_subcommand_exists("nextest")
}

pub fn check_deny_exists() -> Result<(), DynError> {
    check_cargo_subcommand_exists("deny")
}

/// The cargo-deny policy the `ci` task checks the dependency graph against.
pub fn deny_config() -> PathBuf {
    project_root().join("deny.toml")
}

pub fn check_tarpaulin_exists() -> Result<(), DynError> {
    check_cargo_subcommand_exists("tarpaulin")
}

fn check_cargo_subcommand_exists(subcommand: &str) -> Result<(), DynError> {
    let status = Command::new("cargo")
        .current_dir(project_root())
        .args([subcommand, "--version"])
        .output();

    match status {
        Err(ref e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err("Error: 'cargo' is not found on the PATH. Please install it to continue.".into())
        }
        Err(e) => Err(format!("An unknown error occurred: {}", e).into()),
        Ok(output) if !output.status.success() => Err(format!(
            "Error: 'cargo {}' is not installed. Please install it to continue.",
            subcommand
        )
        .into()),
        Ok(_) => Ok(()),
    }
}
