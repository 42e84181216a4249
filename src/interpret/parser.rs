//! Recovery of a structured interpretation from raw model output.
//!
//! The completion provider is told to answer in strict JSON, but
//! generative models routinely wrap the object in prose or formatting
//! noise. Parsing is tiered:
//!
//! 1. Strict parse of the whole text.
//! 2. Greedy `{...}` span (first `{` to last `}`) re-parsed on its own.
//! 3. Failure carrying the offending text for diagnostics.
//!
//! The recovered value is only required to be a JSON object; individual
//! fields are not schema-checked.

use serde_json::Value;

/// Both parse tiers failed. `raw` is the text that could not be parsed:
/// the extracted span when one was found, the full text otherwise.
#[derive(Debug)]
pub struct ParseFailure {
    pub raw: String,
}

pub fn parse_interpretation(text: &str) -> Result<Value, ParseFailure> {
    let trimmed = text.trim();

    if let Some(value) = parse_object(trimmed) {
        return Ok(value);
    }

    match extract_object_span(trimmed) {
        Some(span) => parse_object(span).ok_or_else(|| ParseFailure {
            raw: span.to_string(),
        }),
        None => Err(ParseFailure {
            raw: text.to_string(),
        }),
    }
}

fn parse_object(text: &str) -> Option<Value> {
    serde_json::from_str::<Value>(text)
        .ok()
        .filter(|v| v.is_object())
}

/// Greedy match from the first `{` to the last `}`.
fn extract_object_span(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    (start < end).then(|| &text[start..=end])
}
