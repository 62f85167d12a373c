use std::process::{Command, ExitStatus};

use owo_colors::OwoColorize;

use crate::{check_tarpaulin_exists, project_root};

/// Where the HTML coverage report lands, relative to the project root.
const REPORT_DIR: &str = "target/coverage";

pub fn coverage() -> Result<(), anyhow::Error> {
    println!("Running test coverage analysis for `contact_form`...");
    let status = run_coverage_test()?;
    if status.success() {
        println!("Coverage report written to {}", REPORT_DIR.green());
    } else {
        anyhow::bail!("cargo tarpaulin finished with {status}");
    }
    Ok(())
}

pub fn run_coverage_test() -> Result<ExitStatus, anyhow::Error> {
    if check_tarpaulin_exists().is_err() {
        anyhow::bail!("Unable to run test coverage analysis. cargo-tarpaulin is not available.");
    }
    let status = Command::new("cargo")
        .current_dir(project_root())
        .args([
            "tarpaulin",
            "-p",
            "contact_form",
            "--out",
            "Html",
            "--output-dir",
            REPORT_DIR,
        ])
        .status()?;
    Ok(status)
}
