//! Per-transaction verification results

use crate::merkle::{self, MerkleNode};
use crate::{Error, Hash, Result};
use serde::{Deserialize, Serialize};
use std::io;

/// Protobuf key for field 1, wire type varint
const STATUS_FAIL_KEY: u8 = 0x08;

/// Outcome of verifying a single transaction
///
/// `status_fail` marks a transaction that was included only to charge
/// its gas; its outputs were not applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxVerifyResult {
    #[serde(default)]
    pub status_fail: bool,
}

impl TxVerifyResult {
    pub fn new(status_fail: bool) -> Self {
        TxVerifyResult { status_fail }
    }
}

/// Serialized in its protobuf message form: a `false` flag is the
/// default value and encodes to nothing.
impl MerkleNode for TxVerifyResult {
    fn write_to(&self, w: &mut dyn io::Write) -> io::Result<u64> {
        if !self.status_fail {
            return Ok(0);
        }
        w.write_all(&[STATUS_FAIL_KEY, 0x01])?;
        Ok(2)
    }
}

/// Verification results for every transaction of a block, in block order
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionStatus {
    #[serde(default = "default_version")]
    pub version: u64,
    #[serde(default)]
    pub verify_status: Vec<TxVerifyResult>,
}

fn default_version() -> u64 {
    1
}

impl TransactionStatus {
    /// Create an empty version-1 status list
    pub fn new() -> Self {
        TransactionStatus {
            version: default_version(),
            verify_status: Vec::new(),
        }
    }

    /// Set the status of transaction `i`
    ///
    /// `i == len` appends; anything further out is an error.
    pub fn set_status(&mut self, i: usize, status_fail: bool) -> Result<()> {
        let len = self.verify_status.len();
        match i.cmp(&len) {
            std::cmp::Ordering::Less => self.verify_status[i].status_fail = status_fail,
            std::cmp::Ordering::Equal => self.verify_status.push(TxVerifyResult::new(status_fail)),
            std::cmp::Ordering::Greater => return Err(Error::StatusOutOfRange { index: i, len }),
        }
        Ok(())
    }

    /// Get the status of transaction `i`
    pub fn get_status(&self, i: usize) -> Result<bool> {
        self.verify_status
            .get(i)
            .map(|r| r.status_fail)
            .ok_or(Error::StatusOutOfRange {
                index: i,
                len: self.verify_status.len(),
            })
    }

    pub fn len(&self) -> usize {
        self.verify_status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verify_status.is_empty()
    }

    /// Merkle root over the verification results
    pub fn merkle_root(&self) -> Result<Hash> {
        merkle::tx_status_merkle_root(&self.verify_status)
    }
}

impl Default for TransactionStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<bool> for TransactionStatus {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        TransactionStatus {
            version: default_version(),
            verify_status: iter.into_iter().map(TxVerifyResult::new).collect(),
        }
    }
}
