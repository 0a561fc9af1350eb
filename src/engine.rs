//! Review engine: the sole mutation point for progress records, plus the
//! due-queue and aggregate read paths.
//!
//! Collaborators are constructor-injected. Write paths propagate storage
//! failures; read paths degrade to empty results instead.

use std::sync::Arc;

use crate::clock::Clock;
use crate::config::SrsConfig;
use crate::error::SrsError;
use crate::srs::mastery::{mastery_score, qualifies_as_mastered};
use crate::srs::priority::{priority_score, rank_due_reviews};
use crate::srs::scheduler::schedule_next_review;
use crate::store::{ProgressStore, WordStore};
use crate::types::{
    DueReview, ForgettingCurve, LearningStats, ReviewOutcome, WordProgress, MAX_LEVEL, MIN_LEVEL,
};

pub struct SrsEngine {
    progress: Arc<dyn ProgressStore>,
    words: Arc<dyn WordStore>,
    clock: Arc<dyn Clock>,
    config: SrsConfig,
}

impl SrsEngine {
    pub fn new(
        progress: Arc<dyn ProgressStore>,
        words: Arc<dyn WordStore>,
        clock: Arc<dyn Clock>,
        config: SrsConfig,
    ) -> Self {
        Self {
            progress,
            words,
            clock,
            config,
        }
    }

    pub fn config(&self) -> &SrsConfig {
        &self.config
    }

    /// Applies one review outcome to the pair's progress record, creating
    /// it on first contact, and persists the result.
    ///
    /// Concurrent calls for the same pair are last-writer-wins: the store
    /// contract keys `put` on the pair, so no duplicate records can
    /// appear, but one of two interleaved counter updates may be lost.
    /// Callers treat any error as "review not recorded, retry".
    pub async fn record_review(
        &self,
        user_id: &str,
        word_id: &str,
        outcome: ReviewOutcome,
    ) -> Result<WordProgress, SrsError> {
        if user_id.trim().is_empty() {
            return Err(SrsError::InvalidInput("empty user id".to_string()));
        }
        if word_id.trim().is_empty() {
            return Err(SrsError::InvalidInput("empty word id".to_string()));
        }

        let now = self.clock.now();
        let mut record = match self.progress.get(user_id, word_id).await? {
            Some(existing) => existing,
            None => WordProgress::new(user_id, word_id, now),
        };

        let level_before = record.level;
        let score_before = record.mastery_score;

        record.total_attempts += 1;
        if outcome.is_correct {
            record.correct_attempts += 1;
            record.consecutive_correct += 1;
            record.consecutive_wrong = 0;
        } else {
            record.consecutive_wrong += 1;
            record.consecutive_correct = 0;
        }

        let scheduled = schedule_next_review(now, record.level, outcome.is_correct)?;
        record.level = scheduled.level;
        record.next_review_at = scheduled.due_at;
        record.last_reviewed_at = now;

        record.mastery_score = mastery_score(
            record.level,
            record.total_attempts,
            record.correct_attempts,
            record.consecutive_correct,
        );
        if !record.is_mastered
            && qualifies_as_mastered(
                record.level,
                record.mastery_score,
                record.consecutive_correct,
                &self.config,
            )
        {
            record.is_mastered = true;
        }
        record.updated_at = now;

        self.progress.put(record.clone()).await?;

        tracing::debug!(
            user_id,
            word_id,
            correct = outcome.is_correct,
            response_time_ms = outcome.response_time_ms,
            level_before,
            level_after = record.level,
            score_before,
            score_after = record.mastery_score,
            mastered = record.is_mastered,
            "review recorded"
        );

        Ok(record)
    }

    /// Due records for `user_id`, joined with word content and ranked by
    /// urgency. Invalid ids, store failures, and unresolvable words all
    /// degrade to a smaller (possibly empty) result, never an error.
    pub async fn due_reviews(&self, user_id: &str, limit: usize) -> Vec<DueReview> {
        if user_id.trim().is_empty() {
            tracing::warn!("due_reviews called with empty user id");
            return Vec::new();
        }

        let now = self.clock.now();
        let records = match self.progress.query_due(user_id, now, limit).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "due query failed, returning empty queue");
                return Vec::new();
            }
        };
        if records.is_empty() {
            return Vec::new();
        }

        let word_ids: Vec<String> = records.iter().map(|r| r.word_id.clone()).collect();
        let words = match self.words.words_by_ids(&word_ids).await {
            Ok(words) => words,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "word lookup failed, returning empty queue");
                return Vec::new();
            }
        };

        let mut entries = Vec::with_capacity(records.len());
        for (record, word) in records.into_iter().zip(words) {
            let Some(word) = word else {
                tracing::debug!(word_id = %record.word_id, "dropping due record without word content");
                continue;
            };
            let hours_overdue =
                (now - record.next_review_at).num_seconds() as f64 / 3600.0;
            let priority = priority_score(record.level, hours_overdue, self.config.level_weight);
            entries.push(DueReview {
                word,
                progress: record,
                priority,
            });
        }

        rank_due_reviews(entries, limit)
    }

    /// Aggregate counters over the user's full progress set. Always
    /// well-formed: zero values when the user is unknown or the store is
    /// unreachable.
    pub async fn learning_stats(&self, user_id: &str) -> LearningStats {
        if user_id.trim().is_empty() {
            tracing::warn!("learning_stats called with empty user id");
            return LearningStats::empty();
        }

        let records = match self.progress.query_all(user_id).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "progress scan failed, returning zero stats");
                return LearningStats::empty();
            }
        };

        let now = self.clock.now();
        let due_words = match self.progress.query_due(user_id, now, usize::MAX).await {
            Ok(due) => due.len() as i64,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "due count failed, reporting zero");
                0
            }
        };

        let mut level_distribution = [0i64; 8];
        let mut mastered_words = 0i64;
        let mut score_sum = 0i64;
        for record in &records {
            if (MIN_LEVEL..=MAX_LEVEL).contains(&record.level) {
                level_distribution[(record.level - 1) as usize] += 1;
            }
            if record.is_mastered {
                mastered_words += 1;
            }
            score_sum += record.mastery_score as i64;
        }

        let total_words = records.len() as i64;
        let average_mastery = if total_words > 0 {
            score_sum as f64 / total_words as f64
        } else {
            0.0
        };

        LearningStats {
            total_words,
            mastered_words,
            due_words,
            average_mastery,
            level_distribution,
        }
    }

    /// Retention by level: the share of records at each level answered
    /// correctly at least `retention_threshold` of the time, as a
    /// percentage. Levels with no records report 0.
    pub async fn forgetting_curve(&self, user_id: &str) -> ForgettingCurve {
        let levels: Vec<i32> = (MIN_LEVEL..=MAX_LEVEL).collect();

        if user_id.trim().is_empty() {
            tracing::warn!("forgetting_curve called with empty user id");
            return ForgettingCurve {
                levels,
                retention: vec![0.0; 8],
            };
        }

        let records = match self.progress.query_all(user_id).await {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(user_id, error = %err, "progress scan failed, returning flat curve");
                return ForgettingCurve {
                    levels,
                    retention: vec![0.0; 8],
                };
            }
        };

        let mut totals = [0u32; 8];
        let mut retained = [0u32; 8];
        for record in &records {
            if !(MIN_LEVEL..=MAX_LEVEL).contains(&record.level) {
                continue;
            }
            let bucket = (record.level - 1) as usize;
            totals[bucket] += 1;
            if record.accuracy() >= self.config.retention_threshold {
                retained[bucket] += 1;
            }
        }

        let retention = (0..8)
            .map(|bucket| {
                if totals[bucket] == 0 {
                    0.0
                } else {
                    retained[bucket] as f64 / totals[bucket] as f64 * 100.0
                }
            })
            .collect();

        ForgettingCurve { levels, retention }
    }
}
