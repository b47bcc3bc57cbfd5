//! Prompt: greeting — guide for greeting the user in a chosen language.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, ToolContent};

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let language = args
        .get("language")
        .and_then(|v| v.as_str())
        .unwrap_or("English");

    let text = format!(
        "Please greet the user warmly in {language}. \
         Keep it to one sentence, then ask how you can help today."
    );

    Ok(PromptGetResult {
        description: Some(format!("A {language} greeting for the user")),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_to_english() {
        let result = expand(json!({})).unwrap();
        assert!(result.description.unwrap().contains("English"));
    }

    #[test]
    fn uses_requested_language() {
        let result = expand(json!({ "language": "Spanish" })).unwrap();
        match &result.messages[0].content {
            ToolContent::Text { text } => assert!(text.contains("Spanish")),
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
