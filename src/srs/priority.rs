//! Due-queue priority: low levels and long-overdue records surface first.

use std::cmp::Ordering;

use crate::types::{DueReview, MAX_LEVEL};

/// `(8 + 1 - level) * level_weight + max(hours_overdue, 0)`.
///
/// Records not yet due contribute no overdue bonus rather than a penalty.
pub fn priority_score(level: i32, hours_overdue: f64, level_weight: f64) -> f64 {
    (MAX_LEVEL + 1 - level) as f64 * level_weight + hours_overdue.max(0.0)
}

/// Sorts descending by priority, ties broken ascending by word id so the
/// order is stable across stores, then truncates to `limit`.
pub fn rank_due_reviews(mut entries: Vec<DueReview>, limit: usize) -> Vec<DueReview> {
    entries.sort_by(|a, b| {
        b.priority
            .partial_cmp(&a.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.word.id.cmp(&b.word.id))
    });
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Word, WordProgress};
    use chrono::DateTime;

    fn entry(word_id: &str, level: i32, hours_overdue: f64) -> DueReview {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let mut progress = WordProgress::new("u1", word_id, now);
        progress.level = level;
        DueReview {
            word: Word {
                id: word_id.to_string(),
                spelling: word_id.to_string(),
                phonetic: None,
                meanings: vec![],
            },
            priority: priority_score(level, hours_overdue, 10.0),
            progress,
        }
    }

    #[test]
    fn lower_level_outranks_higher_at_equal_overdue() {
        let ranked = rank_due_reviews(vec![entry("a", 5, 2.0), entry("b", 2, 2.0)], 10);
        assert_eq!(ranked[0].word.id, "b");
        assert_eq!(ranked[1].word.id, "a");
    }

    #[test]
    fn more_overdue_outranks_at_equal_level() {
        let ranked = rank_due_reviews(vec![entry("a", 3, 1.0), entry("b", 3, 30.0)], 10);
        assert_eq!(ranked[0].word.id, "b");
    }

    #[test]
    fn not_yet_due_contributes_nothing() {
        assert_eq!(priority_score(4, -5.0, 10.0), priority_score(4, 0.0, 10.0));
    }

    #[test]
    fn ties_break_by_word_id() {
        let ranked = rank_due_reviews(
            vec![entry("zebra", 3, 2.0), entry("apple", 3, 2.0)],
            10,
        );
        assert_eq!(ranked[0].word.id, "apple");
    }

    #[test]
    fn truncates_to_limit() {
        let entries = vec![entry("a", 1, 0.0), entry("b", 2, 0.0), entry("c", 3, 0.0)];
        let ranked = rank_due_reviews(entries, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].word.id, "a");
    }
}
