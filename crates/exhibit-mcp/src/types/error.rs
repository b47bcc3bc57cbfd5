//! Error types and JSON-RPC error codes for the MCP server.

use serde_json::Value;

use super::message::{JsonRpcError, JsonRpcErrorObject, RequestId, JSONRPC_VERSION};

/// Standard JSON-RPC 2.0 error codes.
pub mod error_codes {
    pub const PARSE_ERROR: i32 = -32700;
    pub const INVALID_REQUEST: i32 = -32600;
    pub const METHOD_NOT_FOUND: i32 = -32601;
    pub const INVALID_PARAMS: i32 = -32602;
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// All protocol-level errors this server can produce.
///
/// Domain-level failures (a tool that cannot run, a resource that does not
/// exist) are NOT errors here — they travel inside successful envelopes as
/// `isError` payloads or empty collections. This type only covers the
/// JSON-RPC reserved range.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Invalid Request: {0}")]
    InvalidRequest(String),

    #[error("Method not found: {0}")]
    MethodNotFound(String),

    #[error("Invalid params: {message}")]
    InvalidParams {
        message: String,
        data: Option<Value>,
    },

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Transport error: {0}")]
    Transport(String),
}

impl McpError {
    pub fn invalid_params(message: impl Into<String>) -> Self {
        McpError::InvalidParams {
            message: message.into(),
            data: None,
        }
    }

    pub fn invalid_params_with(message: impl Into<String>, data: Value) -> Self {
        McpError::InvalidParams {
            message: message.into(),
            data: Some(data),
        }
    }

    pub fn code(&self) -> i32 {
        use error_codes::*;
        match self {
            McpError::ParseError(_) => PARSE_ERROR,
            McpError::InvalidRequest(_) => INVALID_REQUEST,
            McpError::MethodNotFound(_) => METHOD_NOT_FOUND,
            McpError::InvalidParams { .. } => INVALID_PARAMS,
            McpError::Internal(_) | McpError::Transport(_) | McpError::Io(_) => INTERNAL_ERROR,
            McpError::Json(_) => PARSE_ERROR,
        }
    }

    /// Convert into a full error envelope, echoing the request id.
    ///
    /// Internal errors keep the generic "Internal error" message and carry
    /// the detail in `data`, so diagnostics survive without leaking into the
    /// human-facing message field.
    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        let (message, data) = match self {
            McpError::InvalidParams { message, data } => {
                (format!("Invalid params: {message}"), data.clone())
            }
            McpError::Internal(detail) => {
                ("Internal error".to_string(), Some(Value::String(detail.clone())))
            }
            other => (other.to_string(), None),
        };

        JsonRpcError {
            jsonrpc: JSONRPC_VERSION.to_string(),
            id,
            error: JsonRpcErrorObject {
                code: self.code(),
                message,
                data,
            },
        }
    }
}

pub type McpResult<T> = Result<T, McpError>;
