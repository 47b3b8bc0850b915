//! Error types for bc_merkle

use crate::model::Hash;
use thiserror::Error;

/// Result type alias for bc_merkle operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bc_merkle operations
#[derive(Error, Debug)]
pub enum Error {
    /// A leaf failed to serialize itself into the hash context.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid hash: {0}")]
    InvalidHash(String),

    #[error("Status index {index} out of range (len {len})")]
    StatusOutOfRange { index: usize, len: usize },

    #[error("Status count {statuses} does not match transaction count {transactions}")]
    StatusLengthMismatch { transactions: usize, statuses: usize },

    #[error("Mismatched {field}: expected {expected}, computed {actual}")]
    MismatchedMerkleRoot {
        field: &'static str,
        expected: Hash,
        actual: Hash,
    },

    #[error("Config error: {0}")]
    Config(String),
}
