//! HTTP transport — the stateless streamable-HTTP binding.
//!
//! One JSON-RPC envelope per POST; no SSE stream is ever opened, so GET is
//! only accepted in order to refuse it. All transport-level gating (protocol
//! version header, Accept negotiation, verb gating) happens here before the
//! dispatcher sees anything.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, Method as HttpMethod, StatusCode},
    response::{IntoResponse, Json as AxumJson, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::protocol::ProtocolHandler;
use crate::types::{
    error_codes, JsonRpcError, JsonRpcMessage, McpError, McpResult, RequestId, MCP_VERSION,
    SERVER_NAME, SERVER_VERSION,
};

/// Shared server state passed to all handlers via axum State.
pub struct ServerState {
    pub handler: ProtocolHandler,
}

/// HTTP transport for web-based MCP clients.
pub struct HttpTransport {
    state: Arc<ServerState>,
}

impl HttpTransport {
    pub fn new(handler: ProtocolHandler) -> Self {
        Self {
            state: Arc::new(ServerState { handler }),
        }
    }

    /// Run the HTTP server on the given address.
    pub async fn run(&self, addr: &str) -> McpResult<()> {
        let app = build_router(self.state.clone());

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(McpError::Io)?;

        tracing::info!("HTTP transport listening on {addr}");

        axum::serve(listener, app)
            .await
            .map_err(|e| McpError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Build the axum router. Exposed separately so tests can drive it with
/// `tower::ServiceExt::oneshot`.
pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            HttpMethod::GET,
            HttpMethod::POST,
            HttpMethod::DELETE,
            HttpMethod::OPTIONS,
        ])
        .allow_headers(Any);

    Router::new()
        .route(
            "/mcp",
            post(handle_post).get(handle_get).delete(handle_delete),
        )
        .route("/", get(handle_descriptor))
        .route("/health", get(handle_health))
        .layer(cors)
        .with_state(state)
}

/// POST /mcp — the whole protocol rides on this.
async fn handle_post(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: String,
) -> Response {
    // Transport gate 1: the protocol version header is optional, but when
    // present it must match the one supported revision exactly. This is a
    // transport rejection — no JSON-RPC envelope.
    if let Some(version) = headers.get("mcp-protocol-version") {
        let version = version.to_str().unwrap_or("");
        if version != MCP_VERSION {
            return (
                StatusCode::BAD_REQUEST,
                format!(
                    "Unsupported MCP-Protocol-Version: {version} (supported: {MCP_VERSION})"
                ),
            )
                .into_response();
        }
    }

    // Transport gate 2: the caller must be able to receive JSON. The id is
    // forced to null — no envelope has been parsed yet.
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    if !accept.contains("application/json") {
        let error = JsonRpcError::new(
            RequestId::Null,
            error_codes::INVALID_REQUEST,
            "Must accept application/json".to_string(),
        );
        return (StatusCode::BAD_REQUEST, AxumJson(error)).into_response();
    }

    // Everything from here on is the outer boundary: any failure becomes an
    // Internal error envelope at HTTP 500.
    let msg: JsonRpcMessage = match serde_json::from_str(&body) {
        Ok(msg) => msg,
        Err(e) => return internal_error_response(e.to_string()),
    };

    match state.handler.handle_message(msg).await {
        Some(response) => match serde_json::to_string(&response) {
            Ok(json_body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                json_body,
            )
                .into_response(),
            Err(e) => internal_error_response(e.to_string()),
        },
        // Notifications and response echoes are acknowledged, not answered.
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// GET /mcp — this server advertises no streaming capability. A client
/// asking for an SSE stream gets told which verb does work; anything else
/// gets a generic refusal.
async fn handle_get(headers: HeaderMap) -> Response {
    let accept = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    if accept.contains("text/event-stream") {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            "SSE streaming is not supported; POST a JSON-RPC envelope instead",
        )
            .into_response()
    } else {
        (StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response()
    }
}

/// DELETE /mcp — session termination has no meaning without sessions.
async fn handle_delete() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        "No session to terminate (stateless server)",
    )
        .into_response()
}

/// GET / — static server descriptor.
async fn handle_descriptor() -> AxumJson<serde_json::Value> {
    AxumJson(json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "protocol": MCP_VERSION,
        "transport": "stateless-http",
    }))
}

/// GET /health — liveness probe.
async fn handle_health() -> AxumJson<serde_json::Value> {
    AxumJson(json!({
        "status": "ok",
        "version": SERVER_VERSION,
    }))
}

fn internal_error_response(detail: String) -> Response {
    let error = McpError::Internal(detail).to_json_rpc_error(RequestId::Null);
    (StatusCode::INTERNAL_SERVER_ERROR, AxumJson(error)).into_response()
}
