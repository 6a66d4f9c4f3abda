//! Error types for attribute store operations.

use thiserror::Error;

/// Errors that can occur while reading or writing the attribute store.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// A thread panicked while holding the map lock or a bag lock.
    #[error("lock poisoned: {0}")]
    LockPoisoned(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
