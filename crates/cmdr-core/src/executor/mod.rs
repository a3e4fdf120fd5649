//! Sequential shell command execution.
//!
//! Commands run one at a time through the system shell. Each command is
//! awaited to completion (both pipes drained) before the next one starts, so
//! outcomes always line up with the input order.
//!
//! Known limitation: any bytes on stderr mark the command as failed, even when
//! it exited successfully (progress bars, warnings). Exit status is logged but
//! not used to decide the outcome.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info};

/// Prefix used when rendering a failed command.
pub const ERROR_PREFIX: &str = "Error: ";

/// Separator placed between rendered command outcomes.
pub const OUTPUT_SEPARATOR: &str = "\n";

/// Result of running one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// Nothing was written to stderr; holds decoded stdout.
    Output(String),
    /// Something was written to stderr; holds decoded stderr. Stdout is dropped.
    Error(String),
}

impl CommandOutcome {
    /// Classify captured streams.
    pub fn from_streams(stdout: &[u8], stderr: &[u8]) -> Self {
        if stderr.is_empty() {
            Self::Output(String::from_utf8_lossy(stdout).into_owned())
        } else {
            Self::Error(String::from_utf8_lossy(stderr).into_owned())
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl fmt::Display for CommandOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Output(stdout) => f.write_str(stdout),
            Self::Error(stderr) => write!(f, "{}{}", ERROR_PREFIX, stderr),
        }
    }
}

/// Something that can run a single command string.
///
/// [`ShellRunner`] is the real implementation. Other implementations can
/// restrict or replace execution, and tests use stubs to observe launches.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run one command and wait for it to finish.
    async fn run(&self, command: &str) -> Result<CommandOutcome>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
///
/// No timeout is applied: a command that never exits blocks its request.
#[derive(Debug, Clone, Default)]
pub struct ShellRunner {
    working_directory: Option<PathBuf>,
}

impl ShellRunner {
    /// Create a runner that uses the server's current directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every command from the given directory
    pub fn with_working_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_directory = Some(dir.into());
        self
    }

    pub fn working_directory(&self) -> Option<&Path> {
        self.working_directory.as_deref()
    }

    #[cfg(not(target_os = "windows"))]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(command);
        cmd
    }

    #[cfg(target_os = "windows")]
    fn shell_command(command: &str) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", command]);
        cmd
    }
}

#[async_trait]
impl CommandRunner for ShellRunner {
    async fn run(&self, command: &str) -> Result<CommandOutcome> {
        let mut cmd = Self::shell_command(command);

        if let Some(ref dir) = self.working_directory {
            cmd.current_dir(dir);
        }

        // The server has no terminal to hand over, so stdin is closed.
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::spawn(command, e))?;

        debug!(
            command = %command,
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "Command finished"
        );

        Ok(CommandOutcome::from_streams(&output.stdout, &output.stderr))
    }
}

/// Run commands one after another, collecting one outcome per command.
///
/// A failing command never stops the sequence. Only launch failures abort.
pub async fn run_sequence(
    runner: &dyn CommandRunner,
    commands: &[String],
) -> Result<Vec<CommandOutcome>> {
    let mut outcomes = Vec::with_capacity(commands.len());

    for (index, command) in commands.iter().enumerate() {
        debug!(index, command = %command, "Running command");
        let outcome = runner.run(command).await?;
        if outcome.is_error() {
            info!(index, command = %command, "Command wrote to stderr");
        }
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Render outcomes in order, joined by [`OUTPUT_SEPARATOR`].
pub fn aggregate(outcomes: &[CommandOutcome]) -> String {
    outcomes
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(OUTPUT_SEPARATOR)
}

/// Run commands sequentially and return the combined output.
pub async fn execute_commands(runner: &dyn CommandRunner, commands: &[String]) -> Result<String> {
    let outcomes = run_sequence(runner, commands).await?;
    Ok(aggregate(&outcomes))
}
