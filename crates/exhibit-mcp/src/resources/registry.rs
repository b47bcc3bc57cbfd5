//! Resource registration and dispatch.

use crate::types::{ReadResourceResult, ResourceDefinition, ResourceTemplateDefinition};

use super::{greeting, status, templates};

pub struct ResourceRegistry;

impl ResourceRegistry {
    pub fn list_templates() -> Vec<ResourceTemplateDefinition> {
        templates::list_templates()
    }

    pub fn list_resources() -> Vec<ResourceDefinition> {
        templates::list_resources()
    }

    /// Read a resource by URI. An unknown URI is a domain soft failure and
    /// comes back as an empty contents list, never a protocol error.
    pub fn read(uri: &str) -> ReadResourceResult {
        if uri == "exhibit://greeting" {
            greeting::read_default()
        } else if let Some(language) = uri.strip_prefix("exhibit://greeting/") {
            greeting::read_language(language)
        } else if uri == "exhibit://status" {
            status::read_all()
        } else if let Some(component) = uri.strip_prefix("exhibit://status/") {
            status::read_component(component)
        } else {
            ReadResourceResult::empty()
        }
    }
}
