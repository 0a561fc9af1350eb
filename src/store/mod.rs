//! Persistence collaborator contracts.
//!
//! The engine owns no storage. Embedders provide these traits over their
//! own store; `memory` ships in-process implementations for tests and for
//! callers without a database.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::types::{Word, WordProgress};

/// Progress-record persistence, keyed by `(user_id, word_id)`.
///
/// `put` is a keyed upsert: writing a record for a pair that already has
/// one replaces it, so a pair can never hold two rows.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    async fn get(&self, user_id: &str, word_id: &str)
        -> Result<Option<WordProgress>, StoreError>;

    async fn put(&self, record: WordProgress) -> Result<(), StoreError>;

    /// Records for `user_id` with `next_review_at <= now`, ordered by due
    /// time ascending, at most `limit` rows.
    async fn query_due(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<WordProgress>, StoreError>;

    async fn query_all(&self, user_id: &str) -> Result<Vec<WordProgress>, StoreError>;
}

/// Word content lookup. Results keep the input order; unresolved ids map
/// to `None`.
#[async_trait]
pub trait WordStore: Send + Sync {
    async fn words_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Word>>, StoreError>;
}
