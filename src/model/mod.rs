//! Core data model types for bc_merkle

mod hash;
mod status;
mod tx;

pub use hash::Hash;
pub use status::{TransactionStatus, TxVerifyResult};
pub use tx::Tx;
