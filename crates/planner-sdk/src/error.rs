//! # Bridge Error Types
//!
//! Every failure an invocation can end in. Only [`BridgeError::ExternalFailure`]
//! originates in the planner CLI itself; the rest are raised locally before or
//! around the child process.

use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

/// Bridge operation result type
pub type BridgeResult<T> = Result<T, BridgeError>;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Invalid arguments for {operation}: {reason}")]
    InvalidArguments { operation: String, reason: String },

    #[error("Failed to launch '{program}': {source}")]
    ProcessLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Planner CLI did not finish within {}s", .limit.as_secs())]
    Timeout { limit: Duration },

    #[error("IO error while reading planner CLI output: {0}")]
    Io(#[from] std::io::Error),

    /// The planner CLI exited nonzero. `payload` is whatever structured error it
    /// printed, or a synthesized `{code, message}` object.
    #[error("{message}")]
    ExternalFailure {
        exit_code: i32,
        message: String,
        payload: Value,
    },
}

impl BridgeError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Stable snake_case identifier for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownOperation(_) => "unknown_operation",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::ProcessLaunch { .. } => "process_launch_failure",
            Self::Timeout { .. } => "timeout",
            Self::Io(_) => "io_error",
            Self::ExternalFailure { .. } => "external_failure",
        }
    }

    /// Structured payload reported to the calling agent.
    ///
    /// External failures carry the CLI's own error object verbatim; local errors
    /// are rendered as `{error, message}`.
    pub fn payload(&self) -> Value {
        match self {
            Self::ExternalFailure { payload, .. } => payload.clone(),
            other => serde_json::json!({
                "error": other.code(),
                "message": other.to_string(),
            }),
        }
    }

    /// Whether the error was produced by the planner CLI rather than the bridge.
    pub fn is_external(&self) -> bool {
        matches!(self, Self::ExternalFailure { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_failure_payload_is_verbatim() {
        let payload = serde_json::json!({"code": "PlanNotFound", "message": "no plan"});
        let err = BridgeError::ExternalFailure {
            exit_code: 2,
            message: "no plan".to_string(),
            payload: payload.clone(),
        };
        assert_eq!(err.payload(), payload);
        assert_eq!(err.to_string(), "no plan");
        assert!(err.is_external());
    }

    #[test]
    fn test_unknown_operation_payload() {
        let err = BridgeError::UnknownOperation("planner_frobnicate".to_string());
        let payload = err.payload();
        assert_eq!(payload["error"], "unknown_operation");
        assert_eq!(payload["message"], "Unknown tool: planner_frobnicate");
        assert!(!err.is_external());
    }

    #[test]
    fn test_timeout_message() {
        let err = BridgeError::Timeout {
            limit: Duration::from_secs(30),
        };
        assert_eq!(err.code(), "timeout");
        assert_eq!(err.to_string(), "Planner CLI did not finish within 30s");
    }

    #[test]
    fn test_invalid_arguments_helper() {
        let err = BridgeError::invalid_arguments("planner_moveTask", "missing field `bucket`");
        assert_eq!(
            err.to_string(),
            "Invalid arguments for planner_moveTask: missing field `bucket`"
        );
        assert_eq!(err.payload()["error"], "invalid_arguments");
    }
}
