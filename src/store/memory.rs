//! In-process store implementations backed by `HashMap`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::store::{ProgressStore, WordStore};
use crate::types::{Word, WordProgress};

#[derive(Debug, Default)]
pub struct MemoryProgressStore {
    records: RwLock<HashMap<(String, String), WordProgress>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn get(
        &self,
        user_id: &str,
        word_id: &str,
    ) -> Result<Option<WordProgress>, StoreError> {
        let guard = self.records.read().await;
        Ok(guard
            .get(&(user_id.to_string(), word_id.to_string()))
            .cloned())
    }

    async fn put(&self, record: WordProgress) -> Result<(), StoreError> {
        let key = (record.user_id.clone(), record.word_id.clone());
        let mut guard = self.records.write().await;
        guard.insert(key, record);
        Ok(())
    }

    async fn query_due(
        &self,
        user_id: &str,
        now: DateTime<Utc>,
        limit: usize,
    ) -> Result<Vec<WordProgress>, StoreError> {
        let guard = self.records.read().await;
        let mut due: Vec<WordProgress> = guard
            .values()
            .filter(|record| record.user_id == user_id && record.next_review_at <= now)
            .cloned()
            .collect();
        due.sort_by(|a, b| a.next_review_at.cmp(&b.next_review_at));
        due.truncate(limit);
        Ok(due)
    }

    async fn query_all(&self, user_id: &str) -> Result<Vec<WordProgress>, StoreError> {
        let guard = self.records.read().await;
        Ok(guard
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[derive(Debug, Default)]
pub struct MemoryWordStore {
    words: RwLock<HashMap<String, Word>>,
}

impl MemoryWordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, word: Word) {
        let mut guard = self.words.write().await;
        guard.insert(word.id.clone(), word);
    }
}

#[async_trait]
impl WordStore for MemoryWordStore {
    async fn words_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Word>>, StoreError> {
        let guard = self.words.read().await;
        Ok(ids.iter().map(|id| guard.get(id).cloned()).collect())
    }
}
