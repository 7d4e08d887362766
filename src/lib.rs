//! # act-up
//!
//! Starts Docker (if it is not already running) and then runs `act` for a
//! GitHub Actions workflow, so a CI run can be reproduced locally with one
//! command.
//!
//! ## Usage
//!
//! - Run the default workflow: `act-up`
//! - Pick a workflow: `act-up --workflow .github/workflows/cmake-single-platform.yml`
//! - Forward flags to act: `act-up -- --verbose`
//!
//! See README.md for more details and examples.

pub mod act;
pub mod cli;
pub mod docker;
pub mod error;
pub mod preflight;
pub mod repo_root;

pub use error::{Error, Result};
