//! The closed set of supported MCP method names.

/// Every method this server dispatches. Keeping the set closed as an enum
/// lets the dispatcher match exhaustively instead of falling through a
/// string-keyed default arm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Initialize,
    Ping,
    ToolsList,
    ToolsCall,
    ResourcesList,
    ResourcesRead,
    ResourceTemplatesList,
    PromptsList,
    PromptsGet,
    CompletionComplete,
    LoggingSetLevel,
}

impl Method {
    /// Case-sensitive lookup. `Tools/List` is not `tools/list`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "initialize" => Some(Method::Initialize),
            "ping" => Some(Method::Ping),
            "tools/list" => Some(Method::ToolsList),
            "tools/call" => Some(Method::ToolsCall),
            "resources/list" => Some(Method::ResourcesList),
            "resources/read" => Some(Method::ResourcesRead),
            "resources/templates/list" => Some(Method::ResourceTemplatesList),
            "prompts/list" => Some(Method::PromptsList),
            "prompts/get" => Some(Method::PromptsGet),
            "completion/complete" => Some(Method::CompletionComplete),
            "logging/setLevel" => Some(Method::LoggingSetLevel),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Method::Initialize => "initialize",
            Method::Ping => "ping",
            Method::ToolsList => "tools/list",
            Method::ToolsCall => "tools/call",
            Method::ResourcesList => "resources/list",
            Method::ResourcesRead => "resources/read",
            Method::ResourceTemplatesList => "resources/templates/list",
            Method::PromptsList => "prompts/list",
            Method::PromptsGet => "prompts/get",
            Method::CompletionComplete => "completion/complete",
            Method::LoggingSetLevel => "logging/setLevel",
        }
    }
}
