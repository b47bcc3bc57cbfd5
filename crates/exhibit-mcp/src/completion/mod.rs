//! Argument completion — prefix filtering over canned candidate sets.

use crate::types::{CompleteParams, CompleteResult, CompletionReference, LogLevel};

/// Languages with a canned greeting (see `resources::greeting`).
pub const LANGUAGES: [&str; 8] = [
    "English",
    "French",
    "German",
    "Italian",
    "Japanese",
    "Mandarin",
    "Portuguese",
    "Spanish",
];

/// Content types the `render` prompt knows how to ask for.
pub const CONTENT_TYPES: [&str; 5] = [
    "application/json",
    "text/event-stream",
    "text/html",
    "text/markdown",
    "text/plain",
];

/// Pick the candidate set for a (reference, argument) pair. References that
/// name nothing in the catalog, and arguments no catalog entry declares,
/// complete to nothing — a domain soft failure, not a protocol error.
fn candidates(reference: &CompletionReference, argument: &str) -> &'static [&'static str] {
    match (reference, argument) {
        (CompletionReference::Prompt { name }, "language") if name == "greeting" => &LANGUAGES,
        (CompletionReference::Prompt { name }, "severity") if name == "triage" => &LogLevel::NAMES,
        (CompletionReference::Prompt { name }, "contentType") if name == "render" => &CONTENT_TYPES,
        (CompletionReference::Resource { uri }, "language")
            if uri == "exhibit://greeting/{language}" =>
        {
            &LANGUAGES
        }
        (CompletionReference::Resource { uri }, "component")
            if uri == "exhibit://status/{component}" =>
        {
            &crate::resources::status::COMPONENTS
        }
        _ => &[],
    }
}

/// Case-insensitive prefix filter over the selected candidate set. The
/// result always enumerates everything that matched: `total` equals the
/// filtered length and `hasMore` is always false.
pub fn complete(params: &CompleteParams) -> CompleteResult {
    let partial = params.argument.value.to_lowercase();

    let values: Vec<String> = candidates(&params.reference, &params.argument.name)
        .iter()
        .filter(|candidate| candidate.to_lowercase().starts_with(&partial))
        .map(|candidate| candidate.to_string())
        .collect();

    CompleteResult::new(values)
}
