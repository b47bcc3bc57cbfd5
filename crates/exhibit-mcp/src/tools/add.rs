//! Tool: add — sum two numbers.

use serde_json::{json, Value};

use crate::types::{ToolCallResult, ToolDefinition};

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: "add".to_string(),
        description: Some("Adds two numbers".to_string()),
        input_schema: json!({
            "type": "object",
            "properties": {
                "a": { "type": "number", "description": "First addend" },
                "b": { "type": "number", "description": "Second addend" }
            },
            "required": ["a", "b"]
        }),
    }
}

pub fn execute(args: Value) -> ToolCallResult {
    let a = args.get("a").and_then(Value::as_f64);
    let b = args.get("b").and_then(Value::as_f64);

    match (a, b) {
        (Some(a), Some(b)) => {
            ToolCallResult::text(format!("The sum of {a} and {b} is {}.", a + b))
        }
        _ => ToolCallResult::error(
            "Arguments 'a' and 'b' must both be numbers".to_string(),
        ),
    }
}
