//! Optional secondary classification through a local text-generation
//! service.
//!
//! The heuristic answer is always available; refinement only adds an
//! advisory suggestion. Every failure mode (transport error, non-success
//! status, timeout, malformed output) collapses into the same fallback
//! result, so callers never handle an error from this path.

mod client;
mod parse;
mod transport;

pub use client::RefineClient;
pub use parse::{parse_suggestion, Suggestion};
pub use transport::{GenerateOptions, GenerateRequest, GenerateResponse, HttpTransport, RefineTransport};

use serde::{Deserialize, Serialize};

use crate::task::Quadrant;

/// Reasoning fragment attached to every fallback result.
pub const FALLBACK_REASONING: &str = "offline fallback";

/// Reasoning fragment used when the service omits its own.
pub const DEFAULT_REFINED_REASONING: &str = "refined";

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
pub const DEFAULT_MODEL: &str = "llama3.2";
pub const DEFAULT_TEMPERATURE: f64 = 0.1;
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Connection settings for the refinement service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefineConfig {
    pub endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_ms: u64,
}

impl Default for RefineConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

/// How a refinement attempt terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RefineOutcome {
    /// The service produced a parseable suggestion
    Refined,
    /// Any failure; the heuristic answer stands
    Fallback,
}

/// Output of a refinement attempt. Always produced, never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefinementResult {
    pub quadrant: Quadrant,
    pub reasoning_fragment: String,
    pub outcome: RefineOutcome,
}

impl RefinementResult {
    pub fn fallback(heuristic: Quadrant) -> Self {
        Self {
            quadrant: heuristic,
            reasoning_fragment: FALLBACK_REASONING.to_string(),
            outcome: RefineOutcome::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.outcome == RefineOutcome::Fallback
    }
}

/// Instruction sent to the service.
///
/// The text must already be sanitized.
pub fn build_prompt(sanitized_text: &str, heuristic: Quadrant) -> String {
    format!(
        "You classify tasks into Eisenhower quadrants: do, schedule, delegate, eliminate.\n\
         A heuristic labelled this task \"{heuristic}\".\n\
         Task: \"{sanitized_text}\"\n\
         Reply with JSON only: {{\"quadrant\": \"do|schedule|delegate|eliminate\", \
         \"reasoning\": \"one short sentence\"}}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_shape() {
        let result = RefinementResult::fallback(Quadrant::Delegate);
        assert_eq!(result.quadrant, Quadrant::Delegate);
        assert_eq!(result.reasoning_fragment, "offline fallback");
        assert!(result.is_fallback());
    }

    #[test]
    fn prompt_embeds_text_and_label() {
        let prompt = build_prompt("call [phone] re: invoice", Quadrant::Schedule);
        assert!(prompt.contains("\"schedule\""));
        assert!(prompt.contains("call [phone] re: invoice"));
        assert!(prompt.contains("\"quadrant\""));
    }

    #[test]
    fn default_config_values() {
        let cfg = RefineConfig::default();
        assert_eq!(cfg.endpoint, "http://localhost:11434/api/generate");
        assert_eq!(cfg.model, "llama3.2");
        assert_eq!(cfg.timeout_ms, 3000);
        assert!(cfg.temperature < 0.5);
    }
}
