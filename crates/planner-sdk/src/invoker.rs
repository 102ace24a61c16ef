//! Child process execution for the planner CLI.
//!
//! One process per call, environment inherited unmodified, stdin detached so the
//! child can never read from the MCP stdio channel. Both output streams are
//! buffered in full until exit; responses are small JSON documents so there is
//! no size cap.

use std::fmt;
use std::process::Stdio;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::BridgeConfig;
use crate::error::{BridgeError, BridgeResult};

/// Characters of each stream included in failure logs.
const LOG_PREVIEW_CHARS: usize = 200;

/// Raw outcome of one planner CLI run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit status; `-1` when the child was terminated by a signal.
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

impl From<std::process::Output> for ProcessOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Runs the planner CLI with a prepared argument list.
#[async_trait]
pub trait ProcessInvoker: Send + Sync + fmt::Debug {
    /// Run the CLI with `args` following the script path and wait for it to exit.
    async fn invoke(&self, args: &[String]) -> BridgeResult<ProcessOutput>;
}

/// [`ProcessInvoker`] that spawns `<interpreter> <script> <args...>` via tokio.
#[derive(Debug, Clone, Default)]
pub struct CliInvoker {
    config: BridgeConfig,
}

impl CliInvoker {
    pub fn new(config: BridgeConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ProcessInvoker for CliInvoker {
    async fn invoke(&self, args: &[String]) -> BridgeResult<ProcessOutput> {
        let command = self.config.resolve();
        debug!(
            interpreter = %command.interpreter.display(),
            script = %command.script.display(),
            ?args,
            "Spawning planner CLI"
        );

        let child = tokio::process::Command::new(&command.interpreter)
            .arg(&command.script)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| {
                warn!(
                    interpreter = %command.interpreter.display(),
                    error = %source,
                    "Failed to launch planner CLI"
                );
                BridgeError::ProcessLaunch {
                    program: command.interpreter.display().to_string(),
                    source,
                }
            })?;

        let output = match self.config.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait_with_output()).await {
                Ok(result) => result?,
                Err(_) => {
                    // Dropping the wait future drops the child, which kills it.
                    warn!(limit_secs = limit.as_secs(), ?args, "Planner CLI timed out");
                    return Err(BridgeError::Timeout { limit });
                }
            },
            None => child.wait_with_output().await?,
        };

        let output = ProcessOutput::from(output);
        if !output.success() {
            warn!(
                exit_code = output.exit_code,
                stdout = %preview(&output.stdout),
                stderr = %preview(&output.stderr),
                "Planner CLI exited with failure"
            );
        }
        Ok(output)
    }
}

fn preview(text: &str) -> &str {
    match text.char_indices().nth(LOG_PREVIEW_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    fn shell_config(dir: &Path, script_body: &str) -> BridgeConfig {
        let script = dir.join("planner.sh");
        std::fs::write(&script, script_body).unwrap();
        BridgeConfig {
            cli_path: Some(script),
            python_path: Some(PathBuf::from("/bin/sh")),
            timeout: Some(Duration::from_secs(10)),
        }
    }

    fn args(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[tokio::test]
    async fn test_invoke_captures_streams_and_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let config = shell_config(
            dir.path(),
            "printf '{\"ok\":true}'\nprintf 'warning' >&2\nexit 3\n",
        );

        let output = CliInvoker::new(config)
            .invoke(&args(&["list-plans"]))
            .await
            .unwrap();

        assert_eq!(output.exit_code, 3);
        assert_eq!(output.stdout, "{\"ok\":true}");
        assert_eq!(output.stderr, "warning");
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_invoke_forwards_arguments_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = shell_config(dir.path(), "for a in \"$@\"; do printf '%s\\n' \"$a\"; done\n");

        let output = CliInvoker::new(config)
            .invoke(&args(&["move-task-cmd", "--task", "Write docs", "--labels", ""]))
            .await
            .unwrap();

        assert!(output.success());
        let lines: Vec<&str> = output.stdout.split('\n').collect();
        assert_eq!(
            lines,
            vec!["move-task-cmd", "--task", "Write docs", "--labels", "", ""]
        );
    }

    #[tokio::test]
    async fn test_invoke_inherits_environment() {
        let dir = tempfile::tempdir().unwrap();
        let config = shell_config(dir.path(), "printf '%s' \"$HOME\"\n");

        let output = CliInvoker::new(config).invoke(&[]).await.unwrap();
        assert_eq!(output.stdout, std::env::var("HOME").unwrap_or_default());
    }

    #[tokio::test]
    async fn test_invoke_missing_interpreter_is_launch_failure() {
        let config = BridgeConfig {
            cli_path: Some(PathBuf::from("/tmp/planner.py")),
            python_path: Some(PathBuf::from("/nonexistent/bin/python")),
            timeout: None,
        };

        let err = CliInvoker::new(config).invoke(&[]).await.unwrap_err();
        assert!(matches!(err, BridgeError::ProcessLaunch { .. }));
        assert_eq!(err.code(), "process_launch_failure");
    }

    #[tokio::test]
    async fn test_invoke_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = shell_config(dir.path(), "sleep 5\n");
        config.timeout = Some(Duration::from_millis(100));

        let err = CliInvoker::new(config).invoke(&[]).await.unwrap_err();
        assert!(matches!(err, BridgeError::Timeout { .. }));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(300);
        assert_eq!(preview(&long).chars().count(), LOG_PREVIEW_CHARS);
        assert_eq!(preview("short"), "short");
    }
}
