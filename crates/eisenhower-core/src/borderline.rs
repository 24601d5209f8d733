//! Borderline detection.
//!
//! Flags score combinations where the heuristic is least confident. Only
//! borderline tasks are eligible for refinement.

use crate::task::Quadrant;

/// True when the scores sit near a decision boundary.
///
/// Two triggers, either one is enough:
/// - an axis sits exactly on 2 or 3 while the combined score is mid-range
///   (4 to 7 inclusive)
/// - the quadrant is held by the weakest scores that still qualify for it
pub fn is_borderline(urgency: u8, importance: u8, quadrant: Quadrant) -> bool {
    edge_and_sum(urgency, importance) || flip_candidate(urgency, importance, quadrant)
}

fn on_edge(score: u8) -> bool {
    score == 2 || score == 3
}

fn edge_and_sum(urgency: u8, importance: u8) -> bool {
    let sum = urgency as u16 + importance as u16;
    (on_edge(urgency) || on_edge(importance)) && (4..=7).contains(&sum)
}

fn flip_candidate(urgency: u8, importance: u8, quadrant: Quadrant) -> bool {
    match quadrant {
        Quadrant::Do => urgency == 3 && importance == 3,
        Quadrant::Schedule => urgency == 2 && importance >= 3,
        Quadrant::Delegate => urgency >= 3 && importance == 2,
        Quadrant::Eliminate => urgency <= 2 && importance <= 2,
    }
}
