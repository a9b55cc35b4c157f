//! Persistence error types.

use thiserror::Error;

/// Server list persistence failures.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize server list: {0}")]
    Serialize(#[from] serde_json::Error),
}
