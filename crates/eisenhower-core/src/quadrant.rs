//! Quadrant decision table.

use crate::task::Quadrant;

/// Scores at or above this value count as "high" on either axis.
pub const HIGH_THRESHOLD: u8 = 3;

/// Map an (urgency, importance) pair to its quadrant.
///
/// Rules are evaluated in order and the first match wins:
/// 1. urgent and important -> do
/// 2. important only -> schedule
/// 3. urgent only -> delegate
/// 4. everything else -> eliminate
pub fn decide_quadrant(urgency: u8, importance: u8) -> Quadrant {
    let urgent = urgency >= HIGH_THRESHOLD;
    let important = importance >= HIGH_THRESHOLD;

    if urgent && important {
        Quadrant::Do
    } else if !urgent && important {
        Quadrant::Schedule
    } else if urgent && !important {
        Quadrant::Delegate
    } else {
        Quadrant::Eliminate
    }
}
