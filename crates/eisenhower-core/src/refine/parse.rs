//! Extract a quadrant suggestion from model output.
//!
//! Models often wrap JSON in Markdown fences or add a sentence around it,
//! so the parser looks for the outermost `{ ... }` span first.

use serde::Deserialize;

use super::DEFAULT_REFINED_REASONING;
use crate::error::RefineError;
use crate::task::Quadrant;

/// A parsed suggestion with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub quadrant: Quadrant,
    pub reasoning: String,
}

#[derive(Deserialize)]
struct RawSuggestion {
    #[serde(default)]
    quadrant: Option<serde_json::Value>,
    #[serde(default)]
    reasoning: Option<serde_json::Value>,
}

/// Parse the model's `response` text.
///
/// A missing or unknown quadrant label falls back to `heuristic`; missing
/// or non-string reasoning becomes "refined". Output that is not a JSON
/// object is an error.
pub fn parse_suggestion(raw: &str, heuristic: Quadrant) -> Result<Suggestion, RefineError> {
    let body = json_span(strip_fences(raw))
        .ok_or_else(|| RefineError::Parse("no JSON object in response".to_string()))?;

    let parsed: RawSuggestion =
        serde_json::from_str(body).map_err(|e| RefineError::Parse(e.to_string()))?;

    let quadrant = parsed
        .quadrant
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| s.parse::<Quadrant>().ok())
        .unwrap_or(heuristic);

    let reasoning = parsed
        .reasoning
        .as_ref()
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_REFINED_REASONING)
        .to_string();

    Ok(Suggestion {
        quadrant,
        reasoning,
    })
}

fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the info string ("json") on the opening fence line.
    let rest = rest.split_once('\n').map_or(rest, |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn json_span(s: &str) -> Option<&str> {
    let start = s.find('{')?;
    let end = s.rfind('}')?;
    (end > start).then(|| &s[start..=end])
}
