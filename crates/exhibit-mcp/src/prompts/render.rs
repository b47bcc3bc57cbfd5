//! Prompt: render — guide for formatting output as a given content type.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, ToolContent};

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let content_type = args
        .get("contentType")
        .and_then(|v| v.as_str())
        .unwrap_or("text/plain");

    let text = format!(
        "Render your previous answer as `{content_type}`. \
         Emit only the rendered document — no surrounding commentary, \
         no code fences unless the format itself requires them."
    );

    Ok(PromptGetResult {
        description: Some(format!("Reformat the answer as {content_type}")),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}
