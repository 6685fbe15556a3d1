//! Bounded shell command execution for `run_command`.

use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::process::Command;

use crate::config::Config;
use crate::context::{Context, ProjectRoot};
use crate::di::FromContext;
use crate::error::AppError;

/// Captured result of a command that ran to completion.
///
/// A non-zero exit is still an `Ok` output; only timeouts and launch
/// failures are errors.
#[derive(Debug, Clone, Serialize)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `-1` when the process was terminated by a signal.
    pub returncode: i32,
}

impl CommandOutput {
    pub fn succeeded(&self) -> bool {
        self.returncode == 0
    }
}

/// Runs arbitrary command strings through the platform shell.
#[derive(FromContext, Clone)]
pub struct CommandExecutor {
    root: ProjectRoot,
    config: Arc<Config>,
}

impl CommandExecutor {
    pub fn new(root: ProjectRoot, config: Arc<Config>) -> Self {
        Self { root, config }
    }

    /// Run `command` with the configured timeout.
    ///
    /// `cwd` defaults to the project root; relative paths are resolved
    /// against it.
    pub async fn run(&self, command: &str, cwd: Option<&Path>) -> Result<CommandOutput, AppError> {
        let cwd = self.resolve_cwd(cwd);
        self.run_with_timeout(command, &cwd, self.config.shell.timeout())
            .await
    }

    pub(crate) async fn run_with_timeout(
        &self,
        command: &str,
        cwd: &Path,
        timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        tracing::debug!(command = %command, cwd = %cwd.display(), "Spawning shell command");

        let child = shell(command)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| AppError::Launch {
                command: command.to_string(),
                source,
            })?;

        // Dropping the timed-out future drops the child, which kills it.
        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                tracing::warn!(command = %command, timeout = ?timeout, "Command timed out");
                AppError::Timeout(timeout.as_secs())
            })?
            .map_err(|source| AppError::Launch {
                command: command.to_string(),
                source,
            })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            returncode: output.status.code().unwrap_or(-1),
        })
    }

    fn resolve_cwd(&self, cwd: Option<&Path>) -> PathBuf {
        match cwd {
            Some(dir) => self.root.join(dir),
            None => self.root.path().to_path_buf(),
        }
    }
}

#[cfg(unix)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.arg("-c").arg(command);
    cmd
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.arg("/C").arg(command);
    cmd
}
