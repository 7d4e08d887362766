//! Invoking the workflow runner.
//!
//! Builds the act command line, prints it for traceability, and runs act in
//! the foreground with the caller's terminal. act's exit code is the tool's
//! exit code; a failing workflow is act's news to report, not ours.

use std::path::Path;
use std::process::Command;

use crate::error::{Error, Result};
use crate::preflight::ACT_EXE;

/// Assemble the full act argv: workflow, architecture, platform mapping,
/// then any forwarded pass-through arguments, verbatim and in order.
fn build_argv(workflow: &Path, arch: &str, platform_map: &str, extra_args: &[String]) -> Vec<String> {
    let mut argv = vec![
        ACT_EXE.to_string(),
        "-W".to_string(),
        workflow.display().to_string(),
        "--container-architecture".to_string(),
        arch.to_string(),
        "-P".to_string(),
        platform_map.to_string(),
    ];
    argv.extend_from_slice(extra_args);
    argv
}

/// Run act from `repo_root` and hand back its exit code unchanged.
/// A runner killed by a signal reports no code; that maps to 1.
pub fn run(
    repo_root: &Path,
    workflow: &Path,
    arch: &str,
    platform_map: &str,
    extra_args: &[String],
) -> Result<i32> {
    let argv = build_argv(workflow, arch, platform_map, extra_args);

    println!("\nRunning: {}\n", argv.join(" "));

    let status = Command::new(&argv[0])
        .args(&argv[1..])
        .current_dir(repo_root)
        .status()
        .map_err(|source| Error::CommandSpawn {
            command: argv.join(" "),
            source,
        })?;

    Ok(status.code().unwrap_or(1))
}
