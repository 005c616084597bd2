//! Tool-level error reporting.
//!
//! Failures inside a tool are returned to the model as an error tool result
//! carrying `{"error": ..., "code": ...}`, not as a JSON-RPC error.

use esearch_core::Error;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Error tool result for `err`.
pub fn error_result(err: &Error) -> CallToolResult {
    tracing::warn!(code = err.code(), "tool call failed: {}", err.message());
    CallToolResult::error(vec![Content::text(err.to_payload().to_string())])
}

/// Pretty-printed JSON success result.
pub fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, Error> {
    let json = serde_json::to_string_pretty(value)?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

/// Collapse a tool outcome into the result sent back to the caller.
pub fn into_tool_result(outcome: Result<CallToolResult, Error>) -> CallToolResult {
    outcome.unwrap_or_else(|e| error_result(&e))
}
