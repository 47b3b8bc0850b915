//! # bc_merkle
//!
//! Merkle commitments binding a block header to the transactions it
//! carries and to the outcome of verifying each of them.
//!
//! ## Core Concepts
//!
//! - **Leaves**: anything implementing [`MerkleNode`]; transaction ids
//!   ([`Hash`]) and verification results ([`TxVerifyResult`])
//! - **Roots**: a single SHA3-256 [`Hash`] committing to leaf contents and order
//! - **Commitments**: the pair of roots a [`Block`] header declares
//!
//! ## Example
//!
//! ```
//! use bc_merkle::{tx_merkle_root, Hash, Tx};
//!
//! let txs: Vec<Tx> = [b"a", b"b", b"c"]
//!     .iter()
//!     .map(|s| Tx::new(Hash::digest(*s)))
//!     .collect();
//! let root = tx_merkle_root(&txs)?;
//! assert_ne!(root, Hash::EMPTY_STRING);
//! # Ok::<(), bc_merkle::Error>(())
//! ```

pub mod block;
pub mod config;
pub mod hasher;
pub mod merkle;
pub mod model;

mod error;

pub use block::{Block, BlockCommitment};
pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use hasher::{HasherPool, PoolStats, PooledHasher};
pub use merkle::{
    merkle_root, merkle_root_in, prev_power_of_two, tx_merkle_root, tx_status_merkle_root,
    MerkleNode, INTERIOR_PREFIX, LEAF_PREFIX,
};
pub use model::{Hash, TransactionStatus, Tx, TxVerifyResult};
