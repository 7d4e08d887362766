//! Repo root resolution.
//!
//! An explicit `--repo-root` override always wins. Otherwise the root is
//! auto-detected by asking git for the top-level directory, with the
//! directory containing the running executable as a last resort. The
//! resolved root is returned to the caller and passed down explicitly;
//! the process working directory is never changed.

use std::path::{Path, PathBuf};
use std::process::Command;

const GIT_EXE: &str = "git";

/// Warning printed when git-based detection does not produce a root.
pub const AUTO_DETECT_FAILED: &str =
    "Auto-detecting repo root via git failed; falling back to script parent directory.";

/// Resolve the repo root, preferring an explicit override over detection.
#[must_use]
pub fn resolve(override_path: Option<&Path>) -> PathBuf {
    match override_path {
        Some(p) => std::path::absolute(p).unwrap_or_else(|_| p.to_path_buf()),
        None => detect(),
    }
}

/// Auto-detect the repo root from the current directory.
fn detect() -> PathBuf {
    let probe_dir = std::env::current_dir().ok();
    detect_from(probe_dir.as_deref(), executable_dir)
}

/// Detection core, parameterized so it can be exercised against an
/// arbitrary probe directory and fallback.
fn detect_from(probe_dir: Option<&Path>, fallback: impl FnOnce() -> PathBuf) -> PathBuf {
    if which::which(GIT_EXE).is_ok() {
        if let Some(root) = git_toplevel(probe_dir) {
            return root;
        }
    }
    println!("{AUTO_DETECT_FAILED}");
    fallback()
}

/// Ask git for the top-level directory of the work tree containing `dir`.
/// `None` if git exits non-zero or reports nothing.
fn git_toplevel(dir: Option<&Path>) -> Option<PathBuf> {
    let mut cmd = Command::new(GIT_EXE);
    cmd.args(["rev-parse", "--show-toplevel"]);
    if let Some(dir) = dir {
        cmd.current_dir(dir);
    }
    let output = cmd.output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let top = stdout.trim();
    if top.is_empty() {
        return None;
    }
    Some(PathBuf::from(top))
}

/// Directory containing the running executable, or `.` if even that is
/// unavailable.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
