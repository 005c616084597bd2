//! Unified error types for efficient-search.
//!
//! Every error carries a stable code string so tool callers can branch on
//! the kind without parsing the message.

use rmcp::model::{ErrorCode, ErrorData as McpError};
use serde_json::json;

/// Unified error types for the efficient-search server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Missing or invalid tool input (e.g., empty query).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Upstream search provider failed or returned a non-success status.
    #[error("PROVIDER_ERROR: {0}")]
    Provider(String),

    /// Tool name not recognized by the dispatcher.
    #[error("UNKNOWN_TOOL: {0}")]
    UnknownOperation(String),

    /// Tool output could not be serialized.
    #[error("SERIALIZATION_ERROR: {0}")]
    Serialization(String),
}

impl Error {
    /// Stable machine-readable code for this error kind.
    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidInput(_) => "INVALID_INPUT",
            Error::Provider(_) => "PROVIDER_ERROR",
            Error::UnknownOperation(_) => "UNKNOWN_TOOL",
            Error::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// The human-readable message without the code prefix.
    pub fn message(&self) -> String {
        match self {
            Error::InvalidInput(msg) | Error::Provider(msg) | Error::Serialization(msg) => msg.clone(),
            Error::UnknownOperation(name) => format!("Unknown tool: {name}"),
        }
    }

    /// JSON payload reported to the tool caller: `{"error": ..., "code": ...}`.
    pub fn to_payload(&self) -> serde_json::Value {
        json!({ "error": self.message(), "code": self.code() })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) => -32602,
            Error::Provider(_) => -32000,
            Error::UnknownOperation(_) => -32601,
            Error::Serialization(_) => -32603,
        };

        McpError { code: ErrorCode(code), message: err.message().into(), data: None }
    }
}
