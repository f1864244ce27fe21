use std::io;
use std::process::{Command, ExitStatus};
use tempfile::TempDir;
use thiserror::Error;

/// Repository pixiu updates itself from.
pub const SOURCE_REPO: &str = "https://github.com/pixiu-cli/pixiu.git";

/// Errors from the self-update pipeline
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("failed to create a temporary checkout directory")]
    TempDir(#[source] io::Error),

    #[error("failed to launch {step}")]
    Spawn {
        step: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("{step} failed ({status})")]
    StepFailed {
        step: &'static str,
        status: ExitStatus,
    },
}

/// Update pixiu in place: clone the source repository into a temporary
/// directory and reinstall the binary from that checkout.
///
/// The checkout is removed again on every exit path, success or failure.
pub fn update() -> Result<(), UpdateError> {
    let checkout = TempDir::new().map_err(UpdateError::TempDir)?;

    run_step(
        "git clone",
        Command::new("git")
            .arg("clone")
            .arg(SOURCE_REPO)
            .arg(checkout.path()),
    )?;

    run_step(
        "cargo install",
        Command::new("cargo")
            .args(["install", "--path"])
            .arg(checkout.path())
            .arg("--force"),
    )?;

    Ok(())
}

/// Run one pipeline step to completion, inheriting stdout and stderr so the
/// underlying tool's own progress output stays visible.
fn run_step(step: &'static str, command: &mut Command) -> Result<(), UpdateError> {
    let status = command
        .status()
        .map_err(|source| UpdateError::Spawn { step, source })?;

    if !status.success() {
        return Err(UpdateError::StepFailed { step, status });
    }

    Ok(())
}
