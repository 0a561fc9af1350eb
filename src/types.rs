use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 8;

/// Per-(user, word) learning progress. One record per pair; the session
/// recorder is the only writer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordProgress {
    pub id: String,
    pub user_id: String,
    pub word_id: String,
    pub level: i32,
    pub next_review_at: DateTime<Utc>,
    pub last_reviewed_at: DateTime<Utc>,
    pub total_attempts: u32,
    pub correct_attempts: u32,
    pub consecutive_correct: u32,
    pub consecutive_wrong: u32,
    pub mastery_score: i32,
    pub is_mastered: bool,
    pub first_seen_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl WordProgress {
    /// Fresh record for a pair's first review: level 1, due immediately.
    pub fn new(user_id: &str, word_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            word_id: word_id.to_string(),
            level: MIN_LEVEL,
            next_review_at: now,
            last_reviewed_at: now,
            total_attempts: 0,
            correct_attempts: 0,
            consecutive_correct: 0,
            consecutive_wrong: 0,
            mastery_score: 0,
            is_mastered: false,
            first_seen_at: now,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        self.correct_attempts as f64 / self.total_attempts as f64
    }

    pub fn stage(&self) -> LearningStage {
        if self.is_mastered {
            LearningStage::Mastered
        } else if self.total_attempts == 0 {
            LearningStage::New
        } else if self.level >= 5 {
            LearningStage::Reviewing
        } else {
            LearningStage::Learning
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LearningStage {
    New,
    Learning,
    Reviewing,
    Mastered,
}

impl LearningStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Learning => "LEARNING",
            Self::Reviewing => "REVIEWING",
            Self::Mastered => "MASTERED",
        }
    }
}

/// One review answer as reported by the caller.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewOutcome {
    pub is_correct: bool,
    pub response_time_ms: Option<i64>,
}

impl ReviewOutcome {
    pub fn correct() -> Self {
        Self {
            is_correct: true,
            response_time_ms: None,
        }
    }

    pub fn wrong() -> Self {
        Self {
            is_correct: false,
            response_time_ms: None,
        }
    }
}

/// Word content as served by the word store collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub id: String,
    pub spelling: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetic: Option<String>,
    pub meanings: Vec<String>,
}

/// A due record joined with its word, carrying the rank score it was
/// ordered by.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DueReview {
    pub word: Word,
    pub progress: WordProgress,
    pub priority: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningStats {
    pub total_words: i64,
    pub mastered_words: i64,
    pub due_words: i64,
    pub average_mastery: f64,
    /// Record count per level 1..8; always 8 buckets.
    pub level_distribution: [i64; 8],
}

impl LearningStats {
    pub fn empty() -> Self {
        Self {
            total_words: 0,
            mastered_words: 0,
            due_words: 0,
            average_mastery: 0.0,
            level_distribution: [0; 8],
        }
    }
}

/// Retention-by-level report: parallel arrays, levels 1..8, retention as
/// a percentage (0.0 for levels with no records).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgettingCurve {
    pub levels: Vec<i32>,
    pub retention: Vec<f64>,
}
