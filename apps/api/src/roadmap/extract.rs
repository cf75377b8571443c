//! Pulls the JSON payload out of free-form model output.
//!
//! Heuristic: take the span from the first `{` to the last `}` and parse it; if
//! the text has no such span, parse the whole text. Known fragility: two JSON
//! blocks, or prose with stray braces around the payload, produce one span that
//! fails to parse (or parses to the wrong thing). Callers treat any error as a
//! degraded generation, so swapping this for a provider-native structured mode
//! only touches this file.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Failed to parse JSON response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The greedy `{ ... }` span of `text`, if it has one.
pub fn json_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (end > start).then(|| &text[start..=end])
}

pub fn extract(text: &str) -> Result<Value, ExtractionError> {
    let candidate = json_span(text).unwrap_or(text);
    Ok(serde_json::from_str(candidate)?)
}
