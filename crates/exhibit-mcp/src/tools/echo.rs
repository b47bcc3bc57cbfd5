//! Tool: echo — repeat the caller's text back.

use serde_json::{json, Value};

use crate::types::{ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "echo".to_string(),
        description: Some("Echoes back the provided text".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "text": { "type": "string", "description": "Text to echo back" }
            },
            "required": ["text"]
        }),
    }
}

pub fn execute(args: Value) -> ToolCallResult {
    match args.get("text").and_then(Value::as_str) {
        Some(text) => ToolCallResult::text(format!("Echo: {text}")),
        None => ToolCallResult::error("Missing required argument: text".to_string()),
    }
}
