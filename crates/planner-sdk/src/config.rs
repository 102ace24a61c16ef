//! Planner CLI location, interpreter selection, and invocation timeout.
//!
//! Precedence for each setting: explicit value (CLI flag) → environment
//! variable → built-in default. Environment variables are read once into a
//! [`BridgeConfig`]; [`BridgeConfig::resolve`] runs per invocation so a
//! virtualenv created after startup is still picked up.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Overrides the planner CLI entry script.
pub const CLI_PATH_ENV: &str = "PLANNER_CLI_PATH";
/// Overrides the interpreter used to run the script.
pub const PYTHON_PATH_ENV: &str = "PYTHON_PATH";
/// Per-invocation timeout in seconds; `0` disables it.
pub const TIMEOUT_ENV: &str = "PLANNER_MCP_TIMEOUT_SECS";

/// Long enough for a user to finish the device-code login started by `init-auth`.
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;

const DEFAULT_CLI_DIR: &str = ".planner-cli";
const DEFAULT_CLI_SCRIPT: &str = "planner.py";
const DEFAULT_INTERPRETER: &str = "python3";

/// Settings needed to launch the planner CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Entry script. `None` means `$HOME/.planner-cli/planner.py`.
    pub cli_path: Option<PathBuf>,
    /// Interpreter. `None` means the script's sibling venv, else `python3`.
    pub python_path: Option<PathBuf>,
    /// Upper bound on one invocation. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            cli_path: None,
            python_path: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}

/// Interpreter and script for one invocation: `<interpreter> <script> <args...>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub interpreter: PathBuf,
    pub script: PathBuf,
}

impl BridgeConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`, treating empty values as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout = match read(TIMEOUT_ENV) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) => timeout_from_secs(secs),
                Err(e) => {
                    tracing::warn!(
                        value = %raw,
                        error = %e,
                        "Invalid {}, using default of {}s",
                        TIMEOUT_ENV,
                        DEFAULT_TIMEOUT_SECS
                    );
                    Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
                }
            },
            None => Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        };

        Self {
            cli_path: read(CLI_PATH_ENV).map(PathBuf::from),
            python_path: read(PYTHON_PATH_ENV).map(PathBuf::from),
            timeout,
        }
    }

    /// Replace the timeout with `secs` seconds (`0` disables it).
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = timeout_from_secs(secs);
        self
    }

    /// Entry script for the planner CLI.
    pub fn script_path(&self) -> PathBuf {
        if let Some(path) = &self.cli_path {
            return path.clone();
        }
        default_script_path(home_dir())
    }

    /// Interpreter for `script`: explicit override, then `<script dir>/venv/bin/python`
    /// if it exists, then `python3` from `PATH`.
    pub fn interpreter_for(&self, script: &Path) -> PathBuf {
        if let Some(path) = &self.python_path {
            return path.clone();
        }

        let venv_python = script
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join("venv")
            .join("bin")
            .join("python");
        if venv_python.is_file() {
            return venv_python;
        }

        PathBuf::from(DEFAULT_INTERPRETER)
    }

    /// Resolve interpreter and script for a single invocation.
    pub fn resolve(&self) -> ResolvedCommand {
        let script = self.script_path();
        let interpreter = self.interpreter_for(&script);
        ResolvedCommand {
            interpreter,
            script,
        }
    }
}

fn timeout_from_secs(secs: u64) -> Option<Duration> {
    (secs > 0).then(|| Duration::from_secs(secs))
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .filter(|home| !home.is_empty())
        .map(PathBuf::from)
}

/// `<home>/.planner-cli/planner.py`; relative to the working directory when no
/// home directory is known.
fn default_script_path(home: Option<PathBuf>) -> PathBuf {
    let base = match home {
        Some(home) => home,
        None => {
            tracing::warn!(
                "HOME is not set and {} is unset, resolving the planner CLI relative to the working directory",
                CLI_PATH_ENV
            );
            PathBuf::new()
        }
    };
    base.join(DEFAULT_CLI_DIR).join(DEFAULT_CLI_SCRIPT)
}
