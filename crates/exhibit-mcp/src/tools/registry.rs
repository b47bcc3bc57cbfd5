//! Tool registration and dispatch.

use serde_json::Value;

use crate::types::{ToolCallResult, ToolDefinition};

use super::{add, echo};

pub struct ToolRegistry;

impl ToolRegistry {
    pub fn list_tools() -> Vec<ToolDefinition> {
        vec![echo::definition(), add::definition()]
    }

    /// Run a tool by name. Unknown names and execution failures are domain
    /// soft failures — they come back as successful results flagged
    /// `isError`, never as protocol errors, so a caller can surface them as
    /// conversational content.
    pub fn call(name: &str, arguments: Option<Value>) -> ToolCallResult {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "echo" => echo::execute(args),
            "add" => add::execute(args),
            _ => ToolCallResult::error(format!("Unknown tool: {name}")),
        }
    }
}
