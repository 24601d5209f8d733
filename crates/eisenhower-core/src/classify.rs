//! Full classification pipeline.
//!
//! Scores -> quadrant -> badges/reasoning -> borderline gate, then, only
//! when the caller opted in and the task is borderline, sanitize and ask
//! the refinement service for an advisory second opinion.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::badges::{append_refinement, build_reasoning, compute_badges_at};
use crate::borderline::is_borderline;
use crate::quadrant::decide_quadrant;
use crate::refine::{RefineClient, RefineOutcome};
use crate::sanitize::sanitize_for_model;
use crate::scoring::score;
use crate::task::{Quadrant, TaskInput};

/// The fields a caller persists for a task after classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub urgency: u8,
    pub importance: u8,
    /// Heuristic quadrant. Refinement never overwrites it.
    pub quadrant: Quadrant,
    pub badges: Vec<String>,
    pub reasoning: String,
    pub borderline: bool,
    /// Advisory suggestion from refinement, if it ran.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_suggested: Option<Quadrant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<RefineOutcome>,
}

/// Heuristic-only classification. Pure and synchronous.
pub fn classify_heuristic(task: &TaskInput, now: DateTime<Utc>) -> Classification {
    let scores = score(task, now);
    let quadrant = decide_quadrant(scores.urgency, scores.importance);
    let badges = compute_badges_at(&task.text, task.due, &task.tags, task.estimate_mins, now);
    let reasoning = build_reasoning(&badges);
    let borderline = is_borderline(scores.urgency, scores.importance, quadrant);

    debug!(
        urgency = scores.urgency,
        importance = scores.importance,
        quadrant = %quadrant,
        borderline,
        "heuristic classification"
    );

    Classification {
        urgency: scores.urgency,
        importance: scores.importance,
        quadrant,
        badges,
        reasoning,
        borderline,
        ai_suggested: None,
        refinement: None,
    }
}

/// Runs classifications, optionally with refinement.
#[derive(Clone, Default)]
pub struct Classifier {
    refiner: Option<RefineClient>,
}

impl Classifier {
    /// Heuristic-only classifier; refinement requests are ignored.
    pub fn new() -> Self {
        Self { refiner: None }
    }

    pub fn with_refiner(refiner: RefineClient) -> Self {
        Self {
            refiner: Some(refiner),
        }
    }

    /// Classify one task against the current wall clock.
    pub async fn classify(&self, task: &TaskInput, refine_enabled: bool) -> Classification {
        self.classify_at(task, refine_enabled, Utc::now()).await
    }

    /// Classify one task against an explicit reference instant.
    pub async fn classify_at(
        &self,
        task: &TaskInput,
        refine_enabled: bool,
        now: DateTime<Utc>,
    ) -> Classification {
        let mut result = classify_heuristic(task, now);

        let Some(refiner) = self.refiner.as_ref() else {
            return result;
        };
        if !refine_enabled || !result.borderline {
            return result;
        }

        let sanitized = sanitize_for_model(&task.text);
        let refined = refiner
            .refine(&sanitized, result.quadrant, refiner.default_timeout())
            .await;

        result.reasoning = append_refinement(&result.reasoning, &refined.reasoning_fragment);
        result.ai_suggested = Some(refined.quadrant);
        result.refinement = Some(refined.outcome);
        result
    }

    /// Classify independent tasks concurrently. Results keep input order.
    pub async fn classify_many(
        &self,
        tasks: &[TaskInput],
        refine_enabled: bool,
    ) -> Vec<Classification> {
        let now = Utc::now();
        join_all(
            tasks
                .iter()
                .map(|task| self.classify_at(task, refine_enabled, now)),
        )
        .await
    }
}
