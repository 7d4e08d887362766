//! Preflight checks.
//!
//! Everything here runs before any mutating action (starting Docker), so a
//! misconfigured checkout fails fast with a message naming what is missing.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Package list the default workflow installs from. Only its presence
/// matters here; the contents are read by the workflow itself.
pub const APT_PACKAGES_FILE: &str = ".github/apt-packages.txt";

/// The external workflow runner.
pub const ACT_EXE: &str = "act";

/// Resolve `maybe_relative` against `base` unless it is already absolute.
#[must_use]
pub fn resolve_path(base: &Path, maybe_relative: &str) -> PathBuf {
    let p = Path::new(maybe_relative);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    }
}

/// The apt package list must exist at its fixed repo-relative location.
pub fn check_apt_packages(repo_root: &Path) -> Result<()> {
    let path = repo_root.join(APT_PACKAGES_FILE);
    if path.exists() {
        Ok(())
    } else {
        Err(Error::AptPackagesMissing(path))
    }
}

/// The workflow file must exist; returns its resolved path for the runner.
pub fn check_workflow(repo_root: &Path, workflow: &str) -> Result<PathBuf> {
    let path = resolve_path(repo_root, workflow);
    if path.exists() {
        Ok(path)
    } else {
        Err(Error::WorkflowMissing(path))
    }
}

/// act must be discoverable on PATH.
pub fn check_act_installed() -> Result<()> {
    if which::which(ACT_EXE).is_ok() {
        Ok(())
    } else {
        Err(Error::ActMissing)
    }
}
