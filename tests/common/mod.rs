//! Common test helpers shared across integration tests

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(dead_code)] // Not all helpers are used by every test file

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Helper to get the compiled binary path
pub fn get_binary_path() -> PathBuf {
    // Get the directory where cargo places test binaries
    let mut path = env::current_exe().unwrap();
    path.pop(); // Remove test executable name

    // Check if we're in a 'deps' directory (integration tests)
    if path.ends_with("deps") {
        path.pop(); // Go up to debug or release
    }

    path.push("act-up");

    // If the binary doesn't exist in debug, try building it first
    if !path.exists() {
        let build_output = Command::new("cargo")
            .args(["build", "--bin", "act-up"])
            .output()
            .expect("Failed to build binary");

        assert!(
            build_output.status.success(),
            "Failed to build act-up binary: {}",
            String::from_utf8_lossy(&build_output.stderr)
        );
    }

    path
}

/// Helper to create a temporary directory for tests
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Write the apt package list at its expected repo-relative location
pub fn write_apt_packages(repo: &Path) {
    let github = repo.join(".github");
    fs::create_dir_all(&github).unwrap();
    fs::write(github.join("apt-packages.txt"), "cmake\nninja-build\n").unwrap();
}

/// Write a minimal workflow file at `relative` and return its full path
pub fn write_workflow(repo: &Path, relative: &str) -> PathBuf {
    let path = repo.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(
        &path,
        "name: ci\non: [push]\njobs:\n  build:\n    runs-on: ubuntu-latest\n    steps:\n      - uses: actions/checkout@v4\n",
    )
    .unwrap();
    path
}

/// Lay out a repo fixture that passes both file preflight checks
pub fn scaffold_repo(repo: &Path) -> PathBuf {
    write_apt_packages(repo);
    write_workflow(repo, ".github/workflows/cmake-single-platform.yml")
}

/// Drop a fake executable into `bin_dir` so PATH lookups resolve to it.
/// The body runs under /bin/sh, so exit codes and echoes are one-liners.
#[cfg(unix)]
pub fn write_fake_exe(bin_dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = bin_dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Helper to create a Command with a controlled PATH so the test decides
/// exactly which external executables exist
pub fn test_command(binary: &PathBuf, path_dir: &Path) -> Command {
    let mut cmd = Command::new(binary);
    cmd.env("PATH", path_dir);
    cmd
}

/// Package version for testing --version flag
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
