use thiserror::Error;

/// Errors a `ProgressStore` / `WordStore` implementation may surface.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    Query(String),
}

/// Engine-level error taxonomy.
///
/// `Invariant` marks a defect in the interval table / transition policy
/// pairing and is never user-recoverable. `InvalidInput` is a rejected
/// write-path argument. `Storage` propagates a persistence failure on
/// paths that have no safe empty fallback.
#[derive(Debug, Error)]
pub enum SrsError {
    #[error("invariant violation: {0}")]
    Invariant(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}
