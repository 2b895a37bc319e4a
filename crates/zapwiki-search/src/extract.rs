//! Matchable text extraction from section payloads
//!
//! Plain text is used verbatim. Structured nodes are serialized as JSON, so
//! attribute values and tag names end up in the matchable text alongside
//! the prose.

use serde_json::Value;
use thiserror::Error;
use zapwiki_content::ContentPayload;

/// Deepest payload nesting that is still indexed
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Error)]
enum ExtractError {
    #[error("payload nested deeper than {0} levels")]
    TooDeep(usize),

    #[error("payload serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Extract matchable text from a payload, or an empty string if it cannot be read
pub fn section_text(payload: &ContentPayload) -> String {
    match try_extract(payload) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!("Skipping section payload in search index: {}", e);
            String::new()
        }
    }
}

fn try_extract(payload: &ContentPayload) -> Result<String, ExtractError> {
    check_payload_depth(payload, 0)?;

    match payload {
        ContentPayload::Text(text) => Ok(text.clone()),
        ContentPayload::Node(node) => Ok(serde_json::to_string(&node.children)?),
        ContentPayload::Opaque(Value::String(text)) => Ok(text.clone()),
        ContentPayload::Opaque(value) => Ok(serde_json::to_string(value)?),
    }
}

fn check_payload_depth(payload: &ContentPayload, depth: usize) -> Result<(), ExtractError> {
    if depth > MAX_DEPTH {
        return Err(ExtractError::TooDeep(MAX_DEPTH));
    }
    match payload {
        ContentPayload::Text(_) => Ok(()),
        ContentPayload::Node(node) => node
            .children
            .iter()
            .try_for_each(|child| check_payload_depth(child, depth + 1)),
        ContentPayload::Opaque(value) => check_value_depth(value, depth),
    }
}

fn check_value_depth(value: &Value, depth: usize) -> Result<(), ExtractError> {
    if depth > MAX_DEPTH {
        return Err(ExtractError::TooDeep(MAX_DEPTH));
    }
    match value {
        Value::Array(items) => items
            .iter()
            .try_for_each(|item| check_value_depth(item, depth + 1)),
        Value::Object(fields) => fields
            .values()
            .try_for_each(|field| check_value_depth(field, depth + 1)),
        _ => Ok(()),
    }
}
