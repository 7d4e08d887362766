//! Docker daemon readiness.
//!
//! Probes the daemon with `docker info`, kicks off a platform-appropriate
//! start action when it is down, and polls until the daemon answers or the
//! configured timeout elapses. The poll is a plain bounded retry loop: the
//! engine offers no readiness notification, so there is nothing to await.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Error, Result};

/// The container engine client.
pub const DOCKER_EXE: &str = "docker";

const SYSTEMCTL_EXE: &str = "systemctl";
const SERVICE_EXE: &str = "service";
const SUDO_EXE: &str = "sudo";
const OPEN_EXE_MAC: &str = "open";
const DESKTOP_APP_NAME_MAC: &str = "Docker";

/// Delay between readiness probes.
const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Host platform, resolved once and dispatched over when the daemon needs
/// to be started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    MacOs,
    Linux,
    Other(String),
}

impl HostOs {
    /// Platform the binary is running on.
    #[must_use]
    pub fn current() -> Self {
        Self::from_name(std::env::consts::OS)
    }

    fn from_name(name: &str) -> Self {
        match name {
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            other => Self::Other(other.to_string()),
        }
    }
}

/// Whether the daemon currently accepts commands (`docker info` exits 0).
#[must_use]
pub fn daemon_ready() -> bool {
    if which::which(DOCKER_EXE).is_err() {
        return false;
    }
    quiet_status(DOCKER_EXE, &["info"])
}

/// Run a command with its output captured and discarded; true on exit 0.
fn quiet_status(program: &str, args: &[&str]) -> bool {
    Command::new(program)
        .args(args)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Ask Docker Desktop to launch without stealing focus. The return code is
/// ignored; the poll loop is the arbiter of readiness.
fn start_desktop_macos() {
    let _ = Command::new(OPEN_EXE_MAC)
        .args(["-g", "-a", DESKTOP_APP_NAME_MAC])
        .status();
}

/// Start the docker service via systemctl (or service as a fallback),
/// retrying with sudo if the unprivileged attempt fails. The sudo retry
/// inherits the terminal so a password prompt can reach the user.
fn start_service_linux() {
    if which::which(SYSTEMCTL_EXE).is_ok() {
        if !quiet_status(SYSTEMCTL_EXE, &["start", DOCKER_EXE]) && which::which(SUDO_EXE).is_ok() {
            let _ = Command::new(SUDO_EXE)
                .args([SYSTEMCTL_EXE, "start", DOCKER_EXE])
                .status();
        }
    } else if which::which(SERVICE_EXE).is_ok()
        && !quiet_status(SERVICE_EXE, &[DOCKER_EXE, "start"])
        && which::which(SUDO_EXE).is_ok()
    {
        let _ = Command::new(SUDO_EXE)
            .args([SERVICE_EXE, DOCKER_EXE, "start"])
            .status();
    }
}

/// Dispatch the platform start action, announcing what is being attempted.
fn start_engine(os: &HostOs) {
    match os {
        HostOs::MacOs => {
            println!("Docker daemon is not responding — starting Docker Desktop…");
            start_desktop_macos();
        }
        HostOs::Linux => {
            println!("Docker daemon is not responding — trying to start docker service…");
            start_service_linux();
        }
        HostOs::Other(name) => {
            println!("Docker daemon is not responding. OS '{name}'. Start Docker manually and retry.");
        }
    }
}

/// Make sure the daemon is ready, starting it if necessary.
pub fn ensure_running(timeout: Duration) -> Result<()> {
    if which::which(DOCKER_EXE).is_err() {
        return Err(Error::DockerMissing);
    }
    let os = HostOs::current();
    ensure_ready_with(daemon_ready, || start_engine(&os), timeout, POLL_INTERVAL)
}

/// Readiness state machine over injected probe and start actions.
///
/// A probe success before the start action short-circuits everything.
/// Otherwise the start action runs exactly once and the probe is retried
/// every `interval` until it succeeds or `timeout` of wall-clock time has
/// passed.
fn ensure_ready_with<P, S>(
    mut probe: P,
    start: S,
    timeout: Duration,
    interval: Duration,
) -> Result<()>
where
    P: FnMut() -> bool,
    S: FnOnce(),
{
    if probe() {
        return Ok(());
    }

    start();

    let deadline = Instant::now() + timeout;
    loop {
        if probe() {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::DockerTimeout);
        }
        std::thread::sleep(interval);
    }
}
