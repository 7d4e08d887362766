//! CLI module containing the main entry point logic.
//!
//! Parses the flags, resolves the repo root, runs the preflight checks,
//! makes sure Docker is up, and hands off to act. One pass, no state.

use clap::Parser as ClapParser;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::Result;
use crate::{act, docker, preflight, repo_root};

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_WORKFLOW: &str = ".github/workflows/cmake-single-platform.yml";
pub const DEFAULT_ARCH: &str = "linux/amd64";
pub const DEFAULT_PLATFORM_MAP: &str = "ubuntu-latest=ghcr.io/catthehacker/ubuntu:act-latest";
pub const DEFAULT_DOCKER_TIMEOUT_SECONDS: u64 = 180;

/// CLI arguments.
#[derive(ClapParser)]
#[command(name = "act-up")]
#[command(version = PKG_VERSION)]
#[command(about = "Start Docker (if needed) and run act workflow.", long_about = None)]
struct Cli {
    /// Path to workflow yml (relative to repo root)
    #[arg(long, value_name = "PATH", default_value = DEFAULT_WORKFLOW)]
    workflow: String,

    /// act --container-architecture value
    #[arg(long, value_name = "STRING", default_value = DEFAULT_ARCH)]
    arch: String,

    /// act -P mapping, e.g. "ubuntu-latest=ghcr.io/catthehacker/ubuntu:act-latest"
    #[arg(long, value_name = "STRING", default_value = DEFAULT_PLATFORM_MAP)]
    platform_map: String,

    /// Repo root. If omitted, auto-detect using git.
    #[arg(long, value_name = "PATH")]
    repo_root: Option<PathBuf>,

    /// Seconds to wait for Docker to become ready
    #[arg(long, value_name = "SECONDS", default_value_t = DEFAULT_DOCKER_TIMEOUT_SECONDS)]
    docker_timeout: u64,

    /// Extra args passed to act (prefix with --), e.g. -- -v
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "ACT_ARGS")]
    act_args: Vec<String>,
}

/// Strip a single leading `--` separator from the captured remainder.
/// Everything else is forwarded to act untouched.
fn forwarded_args(raw: &[String]) -> &[String] {
    match raw.first() {
        Some(first) if first == "--" => &raw[1..],
        _ => raw,
    }
}

/// Main CLI logic: returns act's exit code, or the first failure.
pub fn run_cli() -> Result<i32> {
    let cli = Cli::parse();
    let extra = forwarded_args(&cli.act_args);

    let root = repo_root::resolve(cli.repo_root.as_deref());
    println!("Using repo root: {}", root.display());

    preflight::check_apt_packages(&root)?;
    let workflow = preflight::check_workflow(&root, &cli.workflow)?;
    preflight::check_act_installed()?;

    docker::ensure_running(Duration::from_secs(cli.docker_timeout))?;

    act::run(&root, &workflow, &cli.arch, &cli.platform_map, extra)
}
