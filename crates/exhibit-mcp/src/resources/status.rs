//! Resource: exhibit://status and exhibit://status/{component}

use serde_json::json;

use crate::types::{ReadResourceResult, ResourceContent, MCP_VERSION, SERVER_VERSION};

/// The reportable server components. Kept in sync with the completion
/// candidate set for the `component` argument.
pub const COMPONENTS: [&str; 4] = ["dispatcher", "logging", "registry", "transport"];

fn component_detail(component: &str) -> Option<serde_json::Value> {
    match component {
        "dispatcher" => Some(json!({
            "component": "dispatcher",
            "status": "ok",
            "methods": 11,
        })),
        "logging" => Some(json!({
            "component": "logging",
            "status": "ok",
            "note": "level is advisory only",
        })),
        "registry" => Some(json!({
            "component": "registry",
            "status": "ok",
            "tools": 2,
            "resources": 2,
            "resourceTemplates": 2,
            "prompts": 3,
        })),
        "transport" => Some(json!({
            "component": "transport",
            "status": "ok",
            "kind": "stateless-http",
        })),
        _ => None,
    }
}

pub fn read_all() -> ReadResourceResult {
    let components: Vec<_> = COMPONENTS
        .iter()
        .filter_map(|c| component_detail(c))
        .collect();

    let content = json!({
        "status": "ok",
        "version": SERVER_VERSION,
        "protocol": MCP_VERSION,
        "components": components,
        "lastModified": chrono::Utc::now().to_rfc3339(),
    });

    ReadResourceResult {
        contents: vec![ResourceContent {
            uri: "exhibit://status".to_string(),
            mime_type: Some("application/json".to_string()),
            text: Some(serde_json::to_string_pretty(&content).unwrap_or_default()),
            last_modified: Some(chrono::Utc::now().to_rfc3339()),
        }],
    }
}

/// Unknown components yield an empty contents list, not an error.
pub fn read_component(component: &str) -> ReadResourceResult {
    match component_detail(component) {
        Some(detail) => ReadResourceResult {
            contents: vec![ResourceContent {
                uri: format!("exhibit://status/{component}"),
                mime_type: Some("application/json".to_string()),
                text: Some(serde_json::to_string_pretty(&detail).unwrap_or_default()),
                last_modified: Some(chrono::Utc::now().to_rfc3339()),
            }],
        },
        None => ReadResourceResult::empty(),
    }
}
