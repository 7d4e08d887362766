//! Failure conditions surfaced to the user.
//!
//! Every handled failure aborts the whole run, so one enum with a
//! human-readable message per variant is all the taxonomy needed. The
//! binary prints the message with an `ERROR:` prefix and exits 1.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Docker executable not found in PATH. Install Docker Desktop (macOS/Windows) \
         or Docker Engine (Linux)."
    )]
    DockerMissing,

    #[error(
        "'act' executable not found in PATH. Install nektos/act (e.g. 'brew install act') \
         or follow the official installation docs."
    )]
    ActMissing,

    #[error("Workflow file not found: {}", .0.display())]
    WorkflowMissing(PathBuf),

    #[error(
        "Required file not found: {}\nCreate it (repo-root/.github/apt-packages.txt) \
         or update the workflow to not depend on it.",
        .0.display()
    )]
    AptPackagesMissing(PathBuf),

    #[error(
        "Docker did not become ready in time. Ensure Docker Desktop is running and \
         does not require manual confirmation."
    )]
    DockerTimeout,

    #[error("failed to run {command}: {source}")]
    CommandSpawn {
        command: String,
        source: std::io::Error,
    },
}
