//! Transaction as seen by the commitment layer

use super::Hash;
use serde::{Deserialize, Serialize};

/// A transaction reduced to the fields a block commitment needs
///
/// Only `id` is committed to by the transactions Merkle root; the
/// header fields travel along so block files stay self-describing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tx {
    /// Transaction id (hash of the transaction header)
    pub id: Hash,

    /// Transaction format version
    #[serde(default = "default_version")]
    pub version: u64,

    /// Size of the serialized transaction in bytes
    #[serde(default)]
    pub serialized_size: u64,
}

fn default_version() -> u64 {
    1
}

impl Tx {
    /// Create a version-1 transaction with the given id
    pub fn new(id: Hash) -> Self {
        Tx {
            id,
            version: default_version(),
            serialized_size: 0,
        }
    }

    /// Set the serialized size
    pub fn with_serialized_size(mut self, size: u64) -> Self {
        self.serialized_size = size;
        self
    }
}

impl From<Hash> for Tx {
    fn from(id: Hash) -> Self {
        Tx::new(id)
    }
}
