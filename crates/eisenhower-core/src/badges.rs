//! Badge extraction and reasoning strings.
//!
//! Badges are short tags naming each signal that fed the scores. They are
//! emitted in detection order and never deduplicated, so a tag that
//! repeats a keyword badge shows up twice.

use chrono::{DateTime, Utc};

use crate::scoring::{
    cue_matches, due_status, DueStatus, DEEP_WORK_MINS, RE_LOW_VALUE, RE_OKR, RE_TIME,
};

/// Maximum length of a reasoning string, in characters.
pub const MAX_REASONING_CHARS: usize = 280;

const TRUNCATION_MARKER: char = '…';
const BADGE_SEPARATOR: &str = "; ";

/// Badges using the current wall clock.
pub fn compute_badges(
    text: &str,
    due: Option<DateTime<Utc>>,
    tags: &[String],
    estimate_mins: Option<i64>,
) -> Vec<String> {
    compute_badges_at(text, due, tags, estimate_mins, Utc::now())
}

/// Badges relative to an explicit reference instant.
pub fn compute_badges_at(
    text: &str,
    due: Option<DateTime<Utc>>,
    tags: &[String],
    estimate_mins: Option<i64>,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut badges = Vec::new();

    match due.map(|d| due_status(d, now)) {
        Some(DueStatus::Overdue) => badges.push("overdue".to_string()),
        Some(DueStatus::Today) => badges.push("today".to_string()),
        Some(DueStatus::Soon) => badges.push("due<48h".to_string()),
        Some(DueStatus::Later) | None => {}
    }

    if cue_matches(&RE_TIME, text) {
        badges.push("time".to_string());
    }

    badges.extend(tags.iter().map(|t| t.to_lowercase()));

    if cue_matches(&RE_OKR, text) {
        badges.push("okr".to_string());
    }
    if estimate_mins.is_some_and(|m| m >= DEEP_WORK_MINS) {
        badges.push("deep".to_string());
    }
    if cue_matches(&RE_LOW_VALUE, text) {
        badges.push("low".to_string());
    }

    badges
}

/// Join badges with `"; "` and cap the result.
pub fn build_reasoning(badges: &[String]) -> String {
    truncate_chars(&badges.join(BADGE_SEPARATOR), MAX_REASONING_CHARS)
}

/// Attach a refinement fragment as `"<reasoning> | LLM: <fragment>"`, capped
/// like the base reasoning.
pub fn append_refinement(reasoning: &str, fragment: &str) -> String {
    truncate_chars(&format!("{reasoning} | LLM: {fragment}"), MAX_REASONING_CHARS)
}

fn truncate_chars(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push(TRUNCATION_MARKER);
    out
}
