#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use danci_srs::{
    ManualClock, MemoryProgressStore, MemoryWordStore, ProgressStore, SrsConfig, SrsEngine,
    StoreError, Word, WordProgress, WordStore,
};

pub const FIXED_TIMESTAMP: i64 = 1_700_000_000;

pub fn fixed_start() -> DateTime<Utc> {
    DateTime::from_timestamp(FIXED_TIMESTAMP, 0).unwrap()
}

pub fn sample_word(id: &str) -> Word {
    Word {
        id: id.to_string(),
        spelling: id.to_string(),
        phonetic: None,
        meanings: vec![format!("meaning of {id}")],
    }
}

pub struct TestHarness {
    pub engine: SrsEngine,
    pub clock: Arc<ManualClock>,
    pub progress: Arc<MemoryProgressStore>,
    pub words: Arc<MemoryWordStore>,
}

/// Engine over in-memory stores and a manual clock, with word content
/// seeded for the given ids.
pub async fn harness_with_words(word_ids: &[&str]) -> TestHarness {
    let clock = Arc::new(ManualClock::new(fixed_start()));
    let progress = Arc::new(MemoryProgressStore::new());
    let words = Arc::new(MemoryWordStore::new());
    for id in word_ids {
        words.insert(sample_word(id)).await;
    }

    let engine = SrsEngine::new(
        progress.clone(),
        words.clone(),
        clock.clone(),
        SrsConfig::default(),
    );

    TestHarness {
        engine,
        clock,
        progress,
        words,
    }
}

/// Progress store where every call fails, for the degraded read paths.
pub struct UnavailableProgressStore;

#[async_trait]
impl ProgressStore for UnavailableProgressStore {
    async fn get(
        &self,
        _user_id: &str,
        _word_id: &str,
    ) -> Result<Option<WordProgress>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn put(&self, _record: WordProgress) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn query_due(
        &self,
        _user_id: &str,
        _now: DateTime<Utc>,
        _limit: usize,
    ) -> Result<Vec<WordProgress>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }

    async fn query_all(&self, _user_id: &str) -> Result<Vec<WordProgress>, StoreError> {
        Err(StoreError::Unavailable("store offline".to_string()))
    }
}

/// Word store that resolves nothing.
pub struct EmptyWordStore;

#[async_trait]
impl WordStore for EmptyWordStore {
    async fn words_by_ids(&self, ids: &[String]) -> Result<Vec<Option<Word>>, StoreError> {
        Ok(vec![None; ids.len()])
    }
}

pub fn engine_with_unavailable_store() -> (SrsEngine, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(fixed_start()));
    let engine = SrsEngine::new(
        Arc::new(UnavailableProgressStore),
        Arc::new(MemoryWordStore::new()),
        clock.clone(),
        SrsConfig::default(),
    );
    (engine, clock)
}
