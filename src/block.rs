//! Block commitments and their validation
//!
//! A block header commits to its body through two Merkle roots: one over
//! the transaction ids and one over the per-transaction verification
//! results. Recomputing both from the body detects any tampering with
//! transaction order, membership, or recorded outcome.

use crate::merkle::{tx_merkle_root, tx_status_merkle_root};
use crate::model::{Hash, TransactionStatus, Tx};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The roots a block header carries for its body
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockCommitment {
    /// Merkle root of the transaction ids
    pub transactions_merkle_root: Hash,
    /// Merkle root of the transaction verification results
    pub transaction_status_hash: Hash,
}

impl BlockCommitment {
    /// Compute the commitment for a block body
    pub fn compute(transactions: &[Tx], status: &TransactionStatus) -> Result<Self> {
        Ok(BlockCommitment {
            transactions_merkle_root: tx_merkle_root(transactions)?,
            transaction_status_hash: tx_status_merkle_root(&status.verify_status)?,
        })
    }
}

/// A block as far as commitments are concerned
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Commitment declared by the block header
    #[serde(default)]
    pub commitment: BlockCommitment,
    pub transactions: Vec<Tx>,
    #[serde(default)]
    pub status: TransactionStatus,
}

impl Block {
    /// Build a block whose declared commitment matches its body
    pub fn new(transactions: Vec<Tx>, status: TransactionStatus) -> Result<Self> {
        let commitment = BlockCommitment::compute(&transactions, &status)?;
        Ok(Block {
            commitment,
            transactions,
            status,
        })
    }

    /// Recompute the commitment from the body
    pub fn compute_commitment(&self) -> Result<BlockCommitment> {
        BlockCommitment::compute(&self.transactions, &self.status)
    }

    /// Check the declared commitment against the body
    pub fn validate_commitment(&self) -> Result<()> {
        if self.status.len() != self.transactions.len() {
            return Err(Error::StatusLengthMismatch {
                transactions: self.transactions.len(),
                statuses: self.status.len(),
            });
        }

        let actual = self.compute_commitment()?;
        check(
            "transactions merkle root",
            self.commitment.transactions_merkle_root,
            actual.transactions_merkle_root,
        )?;
        check(
            "transaction status hash",
            self.commitment.transaction_status_hash,
            actual.transaction_status_hash,
        )?;

        tracing::debug!(
            transactions = self.transactions.len(),
            root = %actual.transactions_merkle_root,
            "block commitment valid"
        );
        Ok(())
    }
}

fn check(field: &'static str, expected: Hash, actual: Hash) -> Result<()> {
    if expected != actual {
        return Err(Error::MismatchedMerkleRoot {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}
