//! Next-review scheduling: transition policy + interval table lookup.

use chrono::{DateTime, Duration, Utc};

use crate::error::SrsError;
use crate::srs::intervals::{interval_hours, next_level};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledReview {
    pub level: i32,
    pub due_at: DateTime<Utc>,
}

/// Applies the transition policy to `level` and schedules the next review
/// at `now + interval(new_level)`.
///
/// A level with no table entry means the table and policy disagree; that
/// is a defect, surfaced as `SrsError::Invariant` rather than clamped
/// away.
pub fn schedule_next_review(
    now: DateTime<Utc>,
    level: i32,
    is_correct: bool,
) -> Result<ScheduledReview, SrsError> {
    if interval_hours(level).is_none() {
        return Err(SrsError::Invariant(format!(
            "review level {level} outside interval table"
        )));
    }

    let new_level = next_level(level, is_correct);
    let hours = interval_hours(new_level).ok_or_else(|| {
        SrsError::Invariant(format!("no interval entry for level {new_level}"))
    })?;

    Ok(ScheduledReview {
        level: new_level,
        due_at: now + Duration::hours(hours),
    })
}
