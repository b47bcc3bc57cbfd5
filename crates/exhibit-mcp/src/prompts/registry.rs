//! Prompt registration and dispatch.

use serde_json::Value;

use crate::types::{McpError, McpResult, PromptArgument, PromptDefinition, PromptGetResult};

use super::{greeting, render, triage};

pub struct PromptRegistry;

impl PromptRegistry {
    pub fn list_prompts() -> Vec<PromptDefinition> {
        vec![
            PromptDefinition {
                name: "greeting".to_string(),
                description: Some("Greet the user in a chosen language".to_string()),
                arguments: Some(vec![PromptArgument {
                    name: "language".to_string(),
                    description: Some("Language for the greeting".to_string()),
                    required: false,
                }]),
            },
            PromptDefinition {
                name: "triage".to_string(),
                description: Some("Triage log output at a given severity".to_string()),
                arguments: Some(vec![PromptArgument {
                    name: "severity".to_string(),
                    description: Some("Minimum severity to triage".to_string()),
                    required: false,
                }]),
            },
            PromptDefinition {
                name: "render".to_string(),
                description: Some("Reformat the previous answer as a content type".to_string()),
                arguments: Some(vec![PromptArgument {
                    name: "contentType".to_string(),
                    description: Some("Target content type".to_string()),
                    required: false,
                }]),
            },
        ]
    }

    /// Expand a prompt by name. Unlike tools and resources, an unknown
    /// prompt surfaces as an Invalid params error.
    pub fn get(name: &str, arguments: Option<Value>) -> McpResult<PromptGetResult> {
        let args = arguments.unwrap_or(Value::Object(serde_json::Map::new()));

        match name {
            "greeting" => greeting::expand(args),
            "triage" => triage::expand(args),
            "render" => render::expand(args),
            _ => Err(McpError::invalid_params(format!("Unknown prompt: {name}"))),
        }
    }
}
