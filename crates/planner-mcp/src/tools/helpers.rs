//! Shared helpers for turning catalog entries and dispatch results into MCP types.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde_json::Value;

use planner_sdk::{BridgeError, OperationDescriptor};

/// Pretty-print a JSON value with two-space indentation.
pub fn pretty_json(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// MCP tool definition for a catalog entry.
pub fn tool_from_descriptor(descriptor: &OperationDescriptor) -> Tool {
    Tool::new(
        descriptor.name,
        descriptor.description,
        Arc::new(descriptor.input_schema.clone()),
    )
}

/// Successful call: one text block holding the pretty-printed value.
pub fn success_result(value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(pretty_json(value))])
}

/// Failed call: one text block holding the pretty-printed error payload, flagged
/// with `isError` so the agent does not have to parse the text to tell.
pub fn error_result(error: &BridgeError) -> CallToolResult {
    CallToolResult::error(vec![Content::text(pretty_json(&error.payload()))])
}
