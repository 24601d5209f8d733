//! Task input and classification value types.
//!
//! [`TaskInput`] is a read-only projection of whatever task record the
//! caller persists. The engine never stores it; it only reads the fields
//! below and returns freshly computed values.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The attributes the engine scores.
///
/// Every field except `text` is optional and defaults to absent/empty when
/// missing from serialized input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInput {
    pub text: String,
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub estimate_mins: Option<i64>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Signed nudge added to the urgency score before clamping.
    #[serde(default)]
    pub urgency_hint: Option<i64>,
    /// Signed nudge added to the importance score before clamping.
    #[serde(default)]
    pub importance_hint: Option<i64>,
}

impl TaskInput {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_due(mut self, due: DateTime<Utc>) -> Self {
        self.due = Some(due);
        self
    }

    pub fn with_estimate(mut self, minutes: i64) -> Self {
        self.estimate_mins = Some(minutes);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_urgency_hint(mut self, hint: i64) -> Self {
        self.urgency_hint = Some(hint);
        self
    }

    pub fn with_importance_hint(mut self, hint: i64) -> Self {
        self.importance_hint = Some(hint);
        self
    }
}

/// Urgency and importance, each within `0..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScoreResult {
    pub urgency: u8,
    pub importance: u8,
}

/// One of the four priority quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrant {
    /// Urgent and important
    Do,
    /// Important, not urgent
    Schedule,
    /// Urgent, not important
    Delegate,
    /// Neither
    Eliminate,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::Do,
        Quadrant::Schedule,
        Quadrant::Delegate,
        Quadrant::Eliminate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Quadrant::Do => "do",
            Quadrant::Schedule => "schedule",
            Quadrant::Delegate => "delegate",
            Quadrant::Eliminate => "eliminate",
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Quadrant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Quadrant::ALL
            .into_iter()
            .find(|q| q.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| format!("unknown quadrant: {label}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_parses_case_insensitively() {
        assert_eq!("Do".parse::<Quadrant>().unwrap(), Quadrant::Do);
        assert_eq!(" SCHEDULE ".parse::<Quadrant>().unwrap(), Quadrant::Schedule);
        assert_eq!("delegate".parse::<Quadrant>().unwrap(), Quadrant::Delegate);
        assert!("later".parse::<Quadrant>().is_err());
    }

    #[test]
    fn quadrant_serializes_lowercase() {
        let json = serde_json::to_string(&Quadrant::Eliminate).unwrap();
        assert_eq!(json, "\"eliminate\"");
    }

    #[test]
    fn task_input_defaults_missing_fields() {
        let task: TaskInput = serde_json::from_str(r#"{"text": "water plants"}"#).unwrap();
        assert_eq!(task.text, "water plants");
        assert!(task.due.is_none());
        assert!(task.tags.is_empty());
        assert!(task.estimate_mins.is_none());
        assert!(task.urgency_hint.is_none());
        assert!(task.importance_hint.is_none());
    }

    #[test]
    fn builder_sets_fields() {
        let task = TaskInput::new("review budget")
            .with_tags(["finance"])
            .with_estimate(90)
            .with_urgency_hint(-1);
        assert_eq!(task.tags, vec!["finance".to_string()]);
        assert_eq!(task.estimate_mins, Some(90));
        assert_eq!(task.urgency_hint, Some(-1));
    }
}
