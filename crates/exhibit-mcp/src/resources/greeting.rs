//! Resource: exhibit://greeting and exhibit://greeting/{language}

use crate::types::{ReadResourceResult, ResourceContent};

/// Languages with a canned greeting. Kept in sync with the completion
/// candidate set for the `language` argument.
const GREETINGS: [(&str, &str); 8] = [
    ("English", "Hello!"),
    ("French", "Bonjour !"),
    ("German", "Hallo!"),
    ("Italian", "Ciao!"),
    ("Japanese", "こんにちは！"),
    ("Mandarin", "你好！"),
    ("Portuguese", "Olá!"),
    ("Spanish", "¡Hola!"),
];

pub fn read_default() -> ReadResourceResult {
    ReadResourceResult {
        contents: vec![ResourceContent {
            uri: "exhibit://greeting".to_string(),
            mime_type: Some("text/plain".to_string()),
            text: Some("Hello!".to_string()),
            last_modified: Some(chrono::Utc::now().to_rfc3339()),
        }],
    }
}

/// Unknown languages yield an empty contents list, not an error.
pub fn read_language(language: &str) -> ReadResourceResult {
    let greeting = GREETINGS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|(_, greeting)| *greeting);

    match greeting {
        Some(text) => ReadResourceResult {
            contents: vec![ResourceContent {
                uri: format!("exhibit://greeting/{language}"),
                mime_type: Some("text/plain".to_string()),
                text: Some(text.to_string()),
                last_modified: Some(chrono::Utc::now().to_rfc3339()),
            }],
        },
        None => ReadResourceResult::empty(),
    }
}
