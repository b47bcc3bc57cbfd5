//! Resource URI templates and static resource definitions.

use crate::types::{ResourceDefinition, ResourceTemplateDefinition};

pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
    vec![
        ResourceTemplateDefinition {
            uri_template: "exhibit://greeting/{language}".to_string(),
            name: "Localized Greeting".to_string(),
            description: Some("A canned greeting in the requested language".to_string()),
            mime_type: Some("text/plain".to_string()),
        },
        ResourceTemplateDefinition {
            uri_template: "exhibit://status/{component}".to_string(),
            name: "Component Status".to_string(),
            description: Some("Status report for a single server component".to_string()),
            mime_type: Some("application/json".to_string()),
        },
    ]
}

pub fn list_resources() -> Vec<ResourceDefinition> {
    vec![
        ResourceDefinition {
            uri: "exhibit://greeting".to_string(),
            name: "Default Greeting".to_string(),
            description: Some("The canned English greeting".to_string()),
            mime_type: Some("text/plain".to_string()),
        },
        ResourceDefinition {
            uri: "exhibit://status".to_string(),
            name: "Server Status".to_string(),
            description: Some("Status report covering all server components".to_string()),
            mime_type: Some("application/json".to_string()),
        },
    ]
}
