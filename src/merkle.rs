//! Merkle roots over ordered lists of transactions and verification results
//!
//! The tree is never materialized. A list of `n` leaves is split at the
//! largest power of two strictly below `n` (exactly in half when `n` is a
//! power of two), both halves are folded recursively, and the two child
//! roots are hashed together. The shape depends on `n` alone, so any two
//! implementations of this scheme agree on the root of the same list.
//!
//! Leaves and interior nodes are hashed under distinct one-byte prefixes
//! so that an interior hash can never be replayed as a leaf hash:
//!
//! ```text
//! leaf(x)        = SHA3-256(0x00 || bytes(x))
//! interior(l, r) = SHA3-256(0x01 || l || r)
//! root([])       = SHA3-256("")   (constant, not computed)
//! ```

use crate::hasher::{self, HasherPool};
use crate::model::{Hash, Tx, TxVerifyResult};
use crate::Result;
use std::io;

/// Domain tag hashed in front of every leaf
pub const LEAF_PREFIX: u8 = 0x00;

/// Domain tag hashed in front of every pair of child roots
pub const INTERIOR_PREFIX: u8 = 0x01;

/// Anything that can stream its canonical bytes into a hash context
pub trait MerkleNode {
    /// Write the node's bytes to `w`, returning how many were written
    fn write_to(&self, w: &mut dyn io::Write) -> io::Result<u64>;
}

impl<T: MerkleNode + ?Sized> MerkleNode for &T {
    fn write_to(&self, w: &mut dyn io::Write) -> io::Result<u64> {
        (**self).write_to(w)
    }
}

impl<T: MerkleNode + ?Sized> MerkleNode for Box<T> {
    fn write_to(&self, w: &mut dyn io::Write) -> io::Result<u64> {
        (**self).write_to(w)
    }
}

/// Merkle root of the transaction ids, in block order
pub fn tx_merkle_root(transactions: &[Tx]) -> Result<Hash> {
    let ids: Vec<&Hash> = transactions.iter().map(|tx| &tx.id).collect();
    merkle_root(&ids)
}

/// Merkle root of per-transaction verification results, in block order
pub fn tx_status_merkle_root(results: &[TxVerifyResult]) -> Result<Hash> {
    merkle_root(results)
}

/// Merkle root of `nodes`, hashing with the process-wide context pool
pub fn merkle_root<N: MerkleNode>(nodes: &[N]) -> Result<Hash> {
    merkle_root_in(hasher::global(), nodes)
}

/// Merkle root of `nodes`, hashing with contexts drawn from `pool`
///
/// Fails only if a leaf fails to serialize; that error is returned as-is
/// and no partial root is produced.
pub fn merkle_root_in<N: MerkleNode>(pool: &HasherPool, nodes: &[N]) -> Result<Hash> {
    let root = fold(pool, nodes)?;
    tracing::trace!(leaves = nodes.len(), root = %root, "computed merkle root");
    Ok(root)
}

fn fold<N: MerkleNode>(pool: &HasherPool, nodes: &[N]) -> io::Result<Hash> {
    match nodes {
        [] => Ok(Hash::EMPTY_STRING),

        [leaf] => {
            let mut h = pool.get256();
            h.update(&[LEAF_PREFIX]);
            leaf.write_to(&mut h)?;
            Ok(h.finalize())
        }

        _ => {
            let (left, right) = nodes.split_at(prev_power_of_two(nodes.len()));
            let left = fold(pool, left)?;
            let right = fold(pool, right)?;

            let mut h = pool.get256();
            h.update(&[INTERIOR_PREFIX]);
            h.update(left.as_bytes());
            h.update(right.as_bytes());
            Ok(h.finalize())
        }
    }
}

/// Split point for a list of `n >= 2` leaves
///
/// Returns the power of two `k` with `k < n <= 2k`: `n / 2` when `n` is a
/// power of two, otherwise the highest power of two below `n`.
pub fn prev_power_of_two(n: usize) -> usize {
    debug_assert!(n >= 2, "no split point for {n} leaves");
    if n.is_power_of_two() {
        return n / 2;
    }
    1 << n.ilog2()
}
