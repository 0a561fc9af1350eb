use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SrsConfig {
    /// Per-level margin in the due-queue priority score.
    pub level_weight: f64,
    pub mastery_min_score: i32,
    pub mastery_min_streak: u32,
    /// Accuracy at or above which a record counts as retained.
    pub retention_threshold: f64,
}

impl Default for SrsConfig {
    fn default() -> Self {
        Self {
            level_weight: 10.0,
            mastery_min_score: 90,
            mastery_min_streak: 5,
            retention_threshold: 0.7,
        }
    }
}

impl SrsConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let level_weight = std::env::var("SRS_LEVEL_WEIGHT")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(defaults.level_weight);

        let mastery_min_score = std::env::var("SRS_MASTERY_MIN_SCORE")
            .ok()
            .and_then(|value| value.parse::<i32>().ok())
            .unwrap_or(defaults.mastery_min_score);

        let mastery_min_streak = std::env::var("SRS_MASTERY_MIN_STREAK")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(defaults.mastery_min_streak);

        let retention_threshold = std::env::var("SRS_RETENTION_THRESHOLD")
            .ok()
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(defaults.retention_threshold);

        Self {
            level_weight,
            mastery_min_score,
            mastery_min_streak,
            retention_threshold,
        }
    }
}
