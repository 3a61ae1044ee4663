//! External process execution
//!
//! Commands run to completion with their output captured; nothing is streamed.
//! A nonzero exit status is not an error at this level: it is reported through
//! [`CommandResult::success`] so callers can decide whether to keep going.

use crate::artifacts::invocation::{CommandResult, Invocation};
use anyhow::Context;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, instrument};

#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Runs the invocation and waits for it to exit.
    ///
    /// Errors only when the process could not be started at all.
    async fn run(&self, invocation: &Invocation) -> anyhow::Result<CommandResult>;
}

/// Runs commands as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    #[instrument(skip(self), fields(command = %invocation))]
    async fn run(&self, invocation: &Invocation) -> anyhow::Result<CommandResult> {
        let mut cmd = Command::new(invocation.program());
        cmd.args(invocation.args());

        if let Some(cwd) = invocation.cwd() {
            cmd.current_dir(cwd);
        }

        // the menu owns stdin
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        debug!("spawning");

        let output = cmd
            .output()
            .await
            .with_context(|| format!("failed to spawn {}", invocation.program()))?;

        debug!(status = %output.status, "finished");

        Ok(CommandResult::new(
            String::from_utf8_lossy(&output.stdout).into_owned(),
            String::from_utf8_lossy(&output.stderr).into_owned(),
            output.status.success(),
        ))
    }
}
