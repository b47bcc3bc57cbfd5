//! Dispatch-level integration tests for exhibit-mcp.
//!
//! Drives the protocol handler directly with JSON envelopes, covering
//! classification, method dispatch, and the error tiers.

use serde_json::{json, Value};

use exhibit_mcp::protocol::ProtocolHandler;
use exhibit_mcp::types::*;

// ─────────────────────── helpers ───────────────────────

fn handler() -> ProtocolHandler {
    ProtocolHandler::new(LogLevel::default())
}

/// Build an MCP JSON-RPC request.
fn mcp_request(id: i64, method: &str, params: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": method,
        "params": params
    })
}

/// Build an initialize request.
fn init_request() -> Value {
    mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2025-06-18",
            "capabilities": {},
            "clientInfo": { "name": "test-client", "version": "1.0" }
        }),
    )
}

/// Send a JSON-RPC message through the handler and return the response.
async fn send(handler: &ProtocolHandler, msg: Value) -> Option<Value> {
    let parsed: JsonRpcMessage = serde_json::from_value(msg).unwrap();
    handler.handle_message(parsed).await
}

/// Send and unwrap the response.
async fn send_unwrap(handler: &ProtocolHandler, msg: Value) -> Value {
    send(handler, msg).await.expect("expected response")
}

// ═══════════════════════════════════════════════════════
// ENVELOPE CLASSIFICATION
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn wrong_jsonrpc_version_is_invalid_request() {
    let handler = handler();
    let msg = json!({ "jsonrpc": "1.0", "id": 42, "method": "ping" });
    let resp = send_unwrap(&handler, msg).await;

    assert_eq!(resp["error"]["code"], -32600);
    assert_eq!(resp["id"], 42, "original id must be echoed");
}

#[tokio::test]
async fn notification_produces_no_response() {
    let handler = handler();
    let msg = json!({ "jsonrpc": "2.0", "method": "notifications/initialized" });
    assert!(send(&handler, msg).await.is_none());
}

#[tokio::test]
async fn response_echo_produces_no_response() {
    let handler = handler();
    let msg = json!({ "jsonrpc": "2.0", "id": 5, "result": {} });
    assert!(send(&handler, msg).await.is_none());

    let err_msg = json!({
        "jsonrpc": "2.0",
        "id": 6,
        "error": { "code": -32000, "message": "client-side failure" }
    });
    assert!(send(&handler, err_msg).await.is_none());
}

#[tokio::test]
async fn string_id_is_echoed_unchanged() {
    let handler = handler();
    let msg = json!({ "jsonrpc": "2.0", "id": "req-abc", "method": "ping" });
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(resp["id"], "req-abc");
}

// ═══════════════════════════════════════════════════════
// METHOD DISPATCH
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn ping_returns_empty_result() {
    let handler = handler();
    let resp = send_unwrap(&handler, mcp_request(7, "ping", json!(null))).await;
    assert_eq!(resp, json!({ "jsonrpc": "2.0", "id": 7, "result": {} }));
}

#[tokio::test]
async fn unknown_method_is_method_not_found() {
    let handler = handler();
    let resp = send_unwrap(&handler, mcp_request(1, "foo/bar/baz", json!({}))).await;
    assert_eq!(resp["error"]["code"], -32601);
    assert_eq!(resp["id"], 1);
}

#[tokio::test]
async fn method_lookup_is_case_sensitive() {
    let handler = handler();
    for variant in ["Tools/List", "PING", "Initialize", "tools/List"] {
        let resp = send_unwrap(&handler, mcp_request(1, variant, json!({}))).await;
        assert_eq!(
            resp["error"]["code"], -32601,
            "case variant {variant} must not match"
        );
    }
}

#[tokio::test]
async fn initialize_returns_fixed_capabilities() {
    let handler = handler();
    let resp = send_unwrap(&handler, init_request()).await;
    let result = &resp["result"];

    assert_eq!(result["protocolVersion"], "2025-06-18");
    assert_eq!(result["serverInfo"]["name"], "exhibit-mcp");
    assert!(result["capabilities"]["tools"].is_object());
    assert!(result["capabilities"]["resources"].is_object());
    assert!(result["capabilities"]["prompts"].is_object());
    assert!(result["capabilities"]["logging"].is_object());
    assert!(result["capabilities"]["completions"].is_object());
}

#[tokio::test]
async fn future_protocol_version_is_coerced_not_rejected() {
    let handler = handler();
    let msg = mcp_request(
        0,
        "initialize",
        json!({
            "protocolVersion": "2099-01-01",
            "capabilities": {},
            "clientInfo": { "name": "future-client", "version": "99.0" }
        }),
    );
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(
        resp["result"]["protocolVersion"], "2025-06-18",
        "server answers with its own protocol version"
    );
}

// ═══════════════════════════════════════════════════════
// TOOLS
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn echo_tool_echoes() {
    let handler = handler();
    let msg = mcp_request(
        1,
        "tools/call",
        json!({ "name": "echo", "arguments": { "text": "hi" } }),
    );
    let resp = send_unwrap(&handler, msg).await;

    let result = &resp["result"];
    assert!(result.get("isError").is_none());
    assert_eq!(result["content"][0]["text"], "Echo: hi");
}

#[tokio::test]
async fn echo_without_text_is_a_soft_failure() {
    let handler = handler();
    let msg = mcp_request(2, "tools/call", json!({ "name": "echo", "arguments": {} }));
    let resp = send_unwrap(&handler, msg).await;

    assert!(resp.get("error").is_none(), "no protocol error: {resp}");
    assert_eq!(resp["result"]["isError"], true);
}

#[tokio::test]
async fn unknown_tool_is_a_soft_failure() {
    let handler = handler();
    let msg = mcp_request(
        3,
        "tools/call",
        json!({ "name": "nonexistent_tool", "arguments": {} }),
    );
    let resp = send_unwrap(&handler, msg).await;

    assert!(resp.get("error").is_none(), "no protocol error: {resp}");
    assert_eq!(resp["result"]["isError"], true);
    let text = resp["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("nonexistent_tool"));
}

#[tokio::test]
async fn add_tool_sums() {
    let handler = handler();
    let msg = mcp_request(
        4,
        "tools/call",
        json!({ "name": "add", "arguments": { "a": 2, "b": 3 } }),
    );
    let resp = send_unwrap(&handler, msg).await;
    let text = resp["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains('5'));
}

#[tokio::test]
async fn tools_call_without_params_is_invalid_params() {
    let handler = handler();
    let resp = send_unwrap(&handler, mcp_request(5, "tools/call", json!(null))).await;
    assert_eq!(resp["error"]["code"], -32602);
}

// ═══════════════════════════════════════════════════════
// RESOURCES
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn reads_template_expanded_greeting() {
    let handler = handler();
    let msg = mcp_request(
        1,
        "resources/read",
        json!({ "uri": "exhibit://greeting/Spanish" }),
    );
    let resp = send_unwrap(&handler, msg).await;
    let contents = resp["result"]["contents"].as_array().unwrap();
    assert_eq!(contents.len(), 1);
    assert_eq!(contents[0]["text"], "¡Hola!");
}

#[tokio::test]
async fn unknown_resource_uri_yields_empty_contents() {
    let handler = handler();
    let msg = mcp_request(2, "resources/read", json!({ "uri": "exhibit://nope" }));
    let resp = send_unwrap(&handler, msg).await;

    assert!(resp.get("error").is_none(), "no protocol error: {resp}");
    assert_eq!(resp["result"]["contents"], json!([]));
}

#[tokio::test]
async fn status_resource_reports_components() {
    let handler = handler();
    let msg = mcp_request(3, "resources/read", json!({ "uri": "exhibit://status" }));
    let resp = send_unwrap(&handler, msg).await;
    let text = resp["result"]["contents"][0]["text"].as_str().unwrap();
    let parsed: Value = serde_json::from_str(text).unwrap();
    assert_eq!(parsed["status"], "ok");
    assert_eq!(parsed["components"].as_array().unwrap().len(), 4);
}

// ═══════════════════════════════════════════════════════
// PROMPTS
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn greeting_prompt_expands() {
    let handler = handler();
    let msg = mcp_request(
        1,
        "prompts/get",
        json!({ "name": "greeting", "arguments": { "language": "French" } }),
    );
    let resp = send_unwrap(&handler, msg).await;
    let text = resp["result"]["messages"][0]["content"]["text"]
        .as_str()
        .unwrap();
    assert!(text.contains("French"));
}

#[tokio::test]
async fn unknown_prompt_is_invalid_params() {
    let handler = handler();
    let msg = mcp_request(2, "prompts/get", json!({ "name": "nonexistent" }));
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(resp["error"]["code"], -32602);
}

// ═══════════════════════════════════════════════════════
// COMPLETION
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn completes_sp_to_spanish() {
    let handler = handler();
    let msg = mcp_request(
        1,
        "completion/complete",
        json!({
            "ref": { "type": "ref/prompt", "name": "greeting" },
            "argument": { "name": "language", "value": "sp" }
        }),
    );
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(
        resp["result"]["completion"],
        json!({ "values": ["Spanish"], "total": 1, "hasMore": false })
    );
}

#[tokio::test]
async fn completion_for_unknown_ref_is_empty() {
    let handler = handler();
    let msg = mcp_request(
        2,
        "completion/complete",
        json!({
            "ref": { "type": "ref/prompt", "name": "nonexistent" },
            "argument": { "name": "language", "value": "sp" }
        }),
    );
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(resp["result"]["completion"]["values"], json!([]));
    assert_eq!(resp["result"]["completion"]["total"], 0);
}

#[tokio::test]
async fn completes_severities_case_insensitively() {
    let handler = handler();
    let msg = mcp_request(
        3,
        "completion/complete",
        json!({
            "ref": { "type": "ref/prompt", "name": "triage" },
            "argument": { "name": "severity", "value": "WARN" }
        }),
    );
    let resp = send_unwrap(&handler, msg).await;
    assert_eq!(resp["result"]["completion"]["values"], json!(["warning"]));
}

// ═══════════════════════════════════════════════════════
// LOGGING
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn set_level_rejects_unknown_severity() {
    let handler = handler();
    let msg = mcp_request(1, "logging/setLevel", json!({ "level": "bogus" }));
    let resp = send_unwrap(&handler, msg).await;

    assert_eq!(resp["error"]["code"], -32602);
    let accepted = resp["error"]["data"]["accepted"].as_array().unwrap();
    assert_eq!(accepted.len(), 8);
    assert!(accepted.contains(&json!("emergency")));
}

#[tokio::test]
async fn set_level_stores_and_changes_nothing_observable() {
    let handler = handler();

    let before = send_unwrap(
        &handler,
        mcp_request(1, "tools/call", json!({ "name": "echo", "arguments": { "text": "x" } })),
    )
    .await;

    let resp = send_unwrap(&handler, mcp_request(2, "logging/setLevel", json!({ "level": "debug" }))).await;
    assert_eq!(resp["result"], json!({}));
    assert_eq!(handler.log_level().await, LogLevel::Debug);

    let after = send_unwrap(
        &handler,
        mcp_request(1, "tools/call", json!({ "name": "echo", "arguments": { "text": "x" } })),
    )
    .await;
    assert_eq!(before, after, "stored level is advisory only");
}

// ═══════════════════════════════════════════════════════
// IDEMPOTENCE
// ═══════════════════════════════════════════════════════

#[tokio::test]
async fn list_methods_are_idempotent() {
    let handler = handler();

    for method in [
        "tools/list",
        "resources/list",
        "resources/templates/list",
        "prompts/list",
    ] {
        let first = send_unwrap(&handler, mcp_request(1, method, json!({}))).await;
        let second = send_unwrap(&handler, mcp_request(1, method, json!({}))).await;
        assert_eq!(
            serde_json::to_string(&first["result"]).unwrap(),
            serde_json::to_string(&second["result"]).unwrap(),
            "{method} must yield byte-identical results"
        );
    }
}
