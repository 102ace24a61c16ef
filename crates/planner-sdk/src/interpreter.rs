//! Normalizes a finished planner CLI run into a JSON value or a structured error.
//!
//! The CLI prints JSON on stdout for both results and errors, but older commands
//! print plain text and some failures only reach stderr. Interpretation is a pure
//! function of the captured [`ProcessOutput`].

use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};
use crate::invoker::ProcessOutput;

const UNKNOWN_ERROR: &str = "Unknown error";

/// Interpret one CLI run.
///
/// - Exit 0: stdout parsed as JSON, or `{"ok": true, "message": <stdout>}` when it
///   is not JSON.
/// - Nonzero: [`BridgeError::ExternalFailure`] carrying the first of stdout JSON,
///   stderr JSON, or a synthesized `{"code": "Error", "message": ...}` object.
pub fn interpret(output: &ProcessOutput) -> BridgeResult<Value> {
    let stdout = output.stdout.trim();

    if output.success() {
        return Ok(serde_json::from_str(stdout).unwrap_or_else(|_| {
            serde_json::json!({
                "ok": true,
                "message": stdout,
            })
        }));
    }

    let stderr = output.stderr.trim();
    let payload = parse_json(stdout)
        .or_else(|| parse_json(stderr))
        .unwrap_or_else(|| {
            let message = [stderr, stdout]
                .into_iter()
                .find(|text| !text.is_empty())
                .unwrap_or(UNKNOWN_ERROR);
            serde_json::json!({
                "code": "Error",
                "message": message,
            })
        });

    Err(BridgeError::ExternalFailure {
        exit_code: output.exit_code,
        message: error_message(&payload),
        payload,
    })
}

/// Best-effort human message for an error payload: `message`, then `error.message`,
/// then the bare string, then the compact JSON.
pub fn error_message(payload: &Value) -> String {
    let field = payload
        .get("message")
        .filter(|v| is_present(v))
        .or_else(|| {
            payload
                .get("error")
                .and_then(|e| e.get("message"))
                .filter(|v| is_present(v))
        });

    match (field, payload) {
        (Some(Value::String(s)), _) => s.clone(),
        (Some(other), _) => other.to_string(),
        (None, Value::String(s)) => s.clone(),
        (None, other) => other.to_string(),
    }
}

fn parse_json(text: &str) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    serde_json::from_str(text).ok()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => false,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}
