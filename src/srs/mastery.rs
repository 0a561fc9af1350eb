//! Composite mastery scoring.
//!
//! Four weighted components, 100 points total:
//! accuracy 40, level 30, streak 20 (saturates at 10 in a row),
//! volume 10 (saturates at 20 attempts). The mastered flag is a one-way
//! promotion checked after every score update.

use crate::config::SrsConfig;
use crate::types::MAX_LEVEL;

const ACCURACY_POINTS: f64 = 40.0;
const LEVEL_POINTS: f64 = 30.0;
const STREAK_POINTS: f64 = 20.0;
const VOLUME_POINTS: f64 = 10.0;
const STREAK_TARGET: f64 = 10.0;
const VOLUME_TARGET: f64 = 20.0;

/// Score in [0, 100]; zero attempts score 0.
pub fn mastery_score(
    level: i32,
    total_attempts: u32,
    correct_attempts: u32,
    consecutive_correct: u32,
) -> i32 {
    if total_attempts == 0 {
        return 0;
    }

    let accuracy = correct_attempts as f64 / total_attempts as f64;
    let level_ratio = level as f64 / MAX_LEVEL as f64;
    let streak_ratio = (consecutive_correct as f64 / STREAK_TARGET).min(1.0);
    let volume_ratio = (total_attempts as f64 / VOLUME_TARGET).min(1.0);

    let score = accuracy * ACCURACY_POINTS
        + level_ratio * LEVEL_POINTS
        + streak_ratio * STREAK_POINTS
        + volume_ratio * VOLUME_POINTS;

    (score.round() as i32).clamp(0, 100)
}

/// Promotion rule for the mastered flag: top level, score and streak at
/// or above the configured thresholds. The flag itself is monotonic; the
/// session recorder never clears it.
pub fn qualifies_as_mastered(level: i32, score: i32, consecutive_correct: u32, config: &SrsConfig) -> bool {
    level == MAX_LEVEL
        && score >= config.mastery_min_score
        && consecutive_correct >= config.mastery_min_streak
}
