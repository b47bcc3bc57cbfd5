//! Prompt: triage — guide for reviewing log output at a given severity.

use serde_json::Value;

use crate::types::{McpResult, PromptGetResult, PromptMessage, ToolContent};

pub fn expand(args: Value) -> McpResult<PromptGetResult> {
    let severity = args
        .get("severity")
        .and_then(|v| v.as_str())
        .unwrap_or("error");

    let text = format!(
        "Review the attached log output and triage every entry at `{severity}` \
         severity or above.\n\
         For each entry:\n\
         1. Summarize what happened in one line\n\
         2. Classify it as actionable or noise\n\
         3. Suggest the next step for actionable entries"
    );

    Ok(PromptGetResult {
        description: Some(format!("Log triage checklist at {severity} severity")),
        messages: vec![PromptMessage {
            role: "user".to_string(),
            content: ToolContent::Text { text },
        }],
    })
}
