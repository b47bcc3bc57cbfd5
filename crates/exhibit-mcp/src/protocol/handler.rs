//! Main request dispatcher — receives JSON-RPC messages, routes to handlers.

use std::sync::Arc;
use tokio::sync::Mutex;

use serde_json::{json, Value};

use crate::completion;
use crate::prompts::PromptRegistry;
use crate::resources::ResourceRegistry;
use crate::tools::ToolRegistry;
use crate::types::*;

use super::method::Method;
use super::validator::validate_request;

/// The main protocol handler that dispatches incoming JSON-RPC messages.
///
/// The capability registries are static, so the only state carried here is
/// the advisory log level — injected at construction rather than living in
/// a module global.
pub struct ProtocolHandler {
    log_level: Arc<Mutex<LogLevel>>,
}

impl ProtocolHandler {
    pub fn new(initial_level: LogLevel) -> Self {
        Self {
            log_level: Arc::new(Mutex::new(initial_level)),
        }
    }

    /// The level most recently stored by `logging/setLevel`.
    pub async fn log_level(&self) -> LogLevel {
        *self.log_level.lock().await
    }

    /// Classify and route one message. Requests produce a response envelope;
    /// notifications and response echoes produce nothing.
    pub async fn handle_message(&self, msg: JsonRpcMessage) -> Option<Value> {
        match msg {
            JsonRpcMessage::Request(req) => Some(self.handle_request(req).await),
            JsonRpcMessage::Notification(notif) => {
                self.handle_notification(notif);
                None
            }
            JsonRpcMessage::Response(_) | JsonRpcMessage::Error(_) => {
                tracing::warn!("Received a response envelope from the client; nothing to route");
                None
            }
        }
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> Value {
        if let Err(e) = validate_request(&request) {
            return serde_json::to_value(e.to_json_rpc_error(request.id)).unwrap_or_default();
        }

        let id = request.id.clone();
        let result = self.dispatch_request(&request).await;

        match result {
            Ok(value) => serde_json::to_value(JsonRpcResponse::new(id, value)).unwrap_or_default(),
            Err(e) => serde_json::to_value(e.to_json_rpc_error(id)).unwrap_or_default(),
        }
    }

    async fn dispatch_request(&self, request: &JsonRpcRequest) -> McpResult<Value> {
        let method = Method::from_name(&request.method)
            .ok_or_else(|| McpError::MethodNotFound(request.method.clone()))?;

        tracing::debug!(method = method.name(), "dispatching request");

        match method {
            Method::Initialize => self.handle_initialize(request.params.clone()),
            Method::Ping => Ok(json!({})),

            Method::ToolsList => to_result(&ToolListResult {
                tools: ToolRegistry::list_tools(),
                next_cursor: None,
            }),
            Method::ToolsCall => self.handle_tools_call(request.params.clone()),

            Method::ResourcesList => to_result(&ResourceListResult {
                resources: ResourceRegistry::list_resources(),
                next_cursor: None,
            }),
            Method::ResourcesRead => self.handle_resources_read(request.params.clone()),
            Method::ResourceTemplatesList => to_result(&ResourceTemplateListResult {
                resource_templates: ResourceRegistry::list_templates(),
                next_cursor: None,
            }),

            Method::PromptsList => to_result(&PromptListResult {
                prompts: PromptRegistry::list_prompts(),
                next_cursor: None,
            }),
            Method::PromptsGet => self.handle_prompts_get(request.params.clone()),

            Method::CompletionComplete => self.handle_complete(request.params.clone()),
            Method::LoggingSetLevel => self.handle_set_level(request.params.clone()).await,
        }
    }

    fn handle_notification(&self, notification: JsonRpcNotification) {
        match notification.method.as_str() {
            "notifications/initialized" => {
                tracing::info!("Client reports initialization complete");
            }
            "notifications/cancelled" => {
                tracing::info!("Received cancellation notification");
            }
            other => {
                tracing::debug!("Ignoring notification: {other}");
            }
        }
    }

    /// `initialize` never negotiates: the client's proposed protocol version
    /// and capabilities are logged and the fixed server answer is returned.
    /// A mismatched version header is rejected at the transport layer, but a
    /// mismatched version in the body is coerced here — both behaviors are
    /// kept as the protocol's HTTP binding describes them.
    fn handle_initialize(&self, params: Option<Value>) -> McpResult<Value> {
        match params.map(serde_json::from_value::<InitializeParams>).transpose() {
            Ok(Some(init)) => {
                if init.protocol_version != MCP_VERSION {
                    tracing::warn!(
                        "Client requested protocol version {}, server supports {}. \
                         Proceeding with server version.",
                        init.protocol_version,
                        MCP_VERSION
                    );
                }
                if let Some(client) = init.client_info {
                    tracing::info!("Initialized with client: {} v{}", client.name, client.version);
                }
            }
            Ok(None) => {}
            Err(e) => {
                tracing::debug!("Unreadable initialize params, answering anyway: {e}");
            }
        }

        to_result(&InitializeResult::default_result())
    }

    fn handle_tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let call: ToolCallParams = require_params(params, "Tool call params required")?;
        let result = ToolRegistry::call(&call.name, call.arguments);
        to_result(&result)
    }

    fn handle_resources_read(&self, params: Option<Value>) -> McpResult<Value> {
        let read: ResourceReadParams = require_params(params, "Resource read params required")?;
        let result = ResourceRegistry::read(&read.uri);
        to_result(&result)
    }

    fn handle_prompts_get(&self, params: Option<Value>) -> McpResult<Value> {
        let get: PromptGetParams = require_params(params, "Prompt get params required")?;
        let result = PromptRegistry::get(&get.name, get.arguments)?;
        to_result(&result)
    }

    fn handle_complete(&self, params: Option<Value>) -> McpResult<Value> {
        let complete: CompleteParams = require_params(params, "Completion params required")?;
        let result = completion::complete(&complete);
        to_result(&result)
    }

    async fn handle_set_level(&self, params: Option<Value>) -> McpResult<Value> {
        let set: SetLevelParams = params
            .map(serde_json::from_value)
            .transpose()
            .map_err(|_| {
                McpError::invalid_params_with(
                    "level must be one of the accepted severities",
                    json!({ "accepted": LogLevel::NAMES }),
                )
            })?
            .ok_or_else(|| {
                McpError::invalid_params_with(
                    "level is required",
                    json!({ "accepted": LogLevel::NAMES }),
                )
            })?;

        let mut level = self.log_level.lock().await;
        *level = set.level;
        tracing::info!(level = %set.level, "log level stored");

        Ok(json!({}))
    }
}

fn to_result<T: serde::Serialize>(value: &T) -> McpResult<Value> {
    serde_json::to_value(value).map_err(|e| McpError::Internal(e.to_string()))
}

fn require_params<T: serde::de::DeserializeOwned>(
    params: Option<Value>,
    missing: &str,
) -> McpResult<T> {
    params
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::invalid_params(e.to_string()))?
        .ok_or_else(|| McpError::invalid_params(missing))
}
