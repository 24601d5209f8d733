//! Urgency and importance scoring.
//!
//! Both scores are integers in `0..=5`, built from additive signals and
//! clamped once at the end:
//!
//! Urgency
//! - Due date: overdue = 5, due today = 4, due within 2 days = 3, later = 0
//! - Text cue "asap" / "today" / "eod" / "tonight": +3
//! - `HH:MM` time token in text: +1
//! - User urgency hint, verbatim
//!
//! Importance
//! - Any tag in the high-value set: +3
//! - Text cue "okr" / "goal" / "milestone": +2
//! - Estimate of at least 60 minutes: +1
//! - Low-value phrase ("clean inbox", "file receipts", "tweak theme"): -2
//! - User importance hint, verbatim

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::task::{ScoreResult, TaskInput};

pub const MAX_SCORE: u8 = 5;

/// Tags that mark a task as important regardless of its text.
pub const HIGH_VALUE_TAGS: [&str; 5] = ["clinic", "patients", "finance", "safety", "learning-core"];

/// Estimates at or above this many minutes count as deep work.
pub const DEEP_WORK_MINS: i64 = 60;

const DAY_MS: i64 = 24 * 60 * 60 * 1000;

macro_rules! cue_pattern {
    ($name:ident, $regex_str:expr) => {
        pub(crate) static $name: LazyLock<Option<Regex>> =
            LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

cue_pattern!(RE_URGENT, r"(?i)\b(?:asap|today|eod|tonight)\b");
cue_pattern!(RE_TIME, r"\b\d{1,2}:\d{2}\b");
cue_pattern!(RE_OKR, r"(?i)\b(?:okr|goal|milestone)\b");
cue_pattern!(RE_LOW_VALUE, r"(?i)(?:clean inbox|file receipts|tweak theme)");

pub(crate) fn cue_matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    matches!(&**pattern, Some(re) if re.is_match(text))
}

/// Where a due date sits relative to the reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueStatus {
    Overdue,
    Today,
    Soon,
    Later,
}

/// Classify a due date against `now`.
///
/// The day delta is the ceiling of the remaining time in whole days, so
/// "today" only covers `due == now` once the strict overdue check has run.
pub fn due_status(due: DateTime<Utc>, now: DateTime<Utc>) -> DueStatus {
    if due < now {
        return DueStatus::Overdue;
    }
    let days = ceil_days(due.signed_duration_since(now).num_milliseconds());
    if days <= 0 {
        DueStatus::Today
    } else if days <= 2 {
        DueStatus::Soon
    } else {
        DueStatus::Later
    }
}

fn ceil_days(ms: i64) -> i64 {
    let whole = ms.div_euclid(DAY_MS);
    if ms.rem_euclid(DAY_MS) > 0 {
        whole + 1
    } else {
        whole
    }
}

fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, MAX_SCORE as i64) as u8
}

/// Urgency score using the current wall clock.
pub fn score_urgency(text: &str, due: Option<DateTime<Utc>>, hint: Option<i64>) -> u8 {
    score_urgency_at(text, due, hint, Utc::now())
}

/// Urgency score relative to an explicit reference instant.
pub fn score_urgency_at(
    text: &str,
    due: Option<DateTime<Utc>>,
    hint: Option<i64>,
    now: DateTime<Utc>,
) -> u8 {
    let mut raw: i64 = match due.map(|d| due_status(d, now)) {
        Some(DueStatus::Overdue) => 5,
        Some(DueStatus::Today) => 4,
        Some(DueStatus::Soon) => 3,
        Some(DueStatus::Later) | None => 0,
    };

    if cue_matches(&RE_URGENT, text) {
        raw += 3;
    }
    if cue_matches(&RE_TIME, text) {
        raw += 1;
    }

    clamp_score(raw.saturating_add(hint.unwrap_or(0)))
}

/// Importance score.
pub fn score_importance(
    text: &str,
    tags: &[String],
    estimate_mins: Option<i64>,
    hint: Option<i64>,
) -> u8 {
    let mut raw: i64 = 0;

    if tags.iter().any(|t| is_high_value_tag(t)) {
        raw += 3;
    }
    if cue_matches(&RE_OKR, text) {
        raw += 2;
    }
    if estimate_mins.is_some_and(|m| m >= DEEP_WORK_MINS) {
        raw += 1;
    }
    if cue_matches(&RE_LOW_VALUE, text) {
        raw -= 2;
    }

    clamp_score(raw.saturating_add(hint.unwrap_or(0)))
}

pub fn is_high_value_tag(tag: &str) -> bool {
    HIGH_VALUE_TAGS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Score both axes of a task.
pub fn score(task: &TaskInput, now: DateTime<Utc>) -> ScoreResult {
    ScoreResult {
        urgency: score_urgency_at(&task.text, task.due, task.urgency_hint, now),
        importance: score_importance(
            &task.text,
            &task.tags,
            task.estimate_mins,
            task.importance_hint,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
    }

    fn tags(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn urgency_from_text_cue_only() {
        assert_eq!(score_urgency_at("ping team ASAP", None, None, now()), 3);
    }

    #[test]
    fn urgency_cue_needs_word_boundary() {
        assert_eq!(score_urgency_at("todays_report", None, None, now()), 0);
        assert_eq!(score_urgency_at("wrap up by EOD", None, None, now()), 3);
    }

    #[test]
    fn urgency_overdue_is_max() {
        let due = now() - Duration::days(1);
        assert_eq!(score_urgency_at("anything", Some(due), None, now()), 5);
    }

    #[test]
    fn urgency_due_exactly_now_is_today() {
        assert_eq!(due_status(now(), now()), DueStatus::Today);
        assert_eq!(score_urgency_at("x", Some(now()), None, now()), 4);
    }

    #[test]
    fn urgency_due_within_two_days() {
        let due = now() + Duration::hours(5);
        assert_eq!(due_status(due, now()), DueStatus::Soon);
        assert_eq!(score_urgency_at("x", Some(due), None, now()), 3);

        let edge = now() + Duration::days(2);
        assert_eq!(due_status(edge, now()), DueStatus::Soon);
    }

    #[test]
    fn urgency_far_due_date_contributes_nothing() {
        let due = now() + Duration::days(2) + Duration::milliseconds(1);
        assert_eq!(due_status(due, now()), DueStatus::Later);
        assert_eq!(score_urgency_at("x", Some(due), None, now()), 0);
    }

    #[test]
    fn urgency_time_token_adds_one() {
        assert_eq!(score_urgency_at("standup 9:30", None, None, now()), 1);
        assert_eq!(score_urgency_at("call tonight at 18:00", None, None, now()), 4);
    }

    #[test]
    fn urgency_hint_is_added_then_clamped() {
        assert_eq!(score_urgency_at("x", None, Some(2), now()), 2);
        assert_eq!(score_urgency_at("asap", None, Some(1000), now()), 5);
        assert_eq!(score_urgency_at("asap", None, Some(-1000), now()), 0);
        assert_eq!(score_urgency_at("asap", None, Some(i64::MAX), now()), 5);
        assert_eq!(score_urgency_at("asap", None, Some(i64::MIN), now()), 0);
    }

    #[test]
    fn importance_tag_and_estimate() {
        assert_eq!(score_importance("", &tags(&["finance"]), Some(90), None), 4);
    }

    #[test]
    fn importance_tag_match_is_case_insensitive() {
        assert_eq!(score_importance("", &tags(&["Patients"]), None, None), 3);
        assert_eq!(score_importance("", &tags(&["misc"]), None, None), 0);
    }

    #[test]
    fn importance_okr_cue() {
        assert_eq!(score_importance("Draft Q3 OKR", &[], None, None), 2);
        assert_eq!(score_importance("goalkeeper practice", &[], None, None), 0);
    }

    #[test]
    fn importance_low_value_penalty_floors_at_zero() {
        assert_eq!(score_importance("clean inbox", &[], None, None), 0);
        assert_eq!(
            score_importance("file receipts for milestone", &tags(&["finance"]), None, None),
            3
        );
    }

    #[test]
    fn importance_short_estimate_does_not_count() {
        assert_eq!(score_importance("", &[], Some(59), None), 0);
        assert_eq!(score_importance("", &[], Some(60), None), 1);
    }

    #[test]
    fn score_combines_both_axes() {
        let task = TaskInput::new("finish milestone review today")
            .with_tags(["clinic"])
            .with_estimate(120);
        let result = score(&task, now());
        assert_eq!(result.urgency, 3);
        assert_eq!(result.importance, 5);
    }
}
