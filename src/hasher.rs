//! Pooled SHA3-256 hash contexts
//!
//! Merkle computation hashes one small message per tree node, so contexts
//! are recycled through a pool instead of being built for every node.
//! A [`PooledHasher`] is an exclusive handle on one context; dropping it
//! resets the context and puts it back, whichever way the caller exits.

use crate::model::Hash;
use parking_lot::Mutex;
use sha3::{Digest, Sha3_256};
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Idle contexts kept beyond this count are dropped on release
pub const MAX_IDLE: usize = 64;

static GLOBAL: HasherPool = HasherPool::new();

/// Acquire a SHA3-256 context from the process-wide pool
pub fn get256() -> PooledHasher<'static> {
    GLOBAL.get256()
}

/// The process-wide pool
pub fn global() -> &'static HasherPool {
    &GLOBAL
}

/// A pool of reusable SHA3-256 contexts, safe to share between threads
pub struct HasherPool {
    idle: Mutex<Vec<Sha3_256>>,
    outstanding: AtomicUsize,
    finalized: AtomicUsize,
}

/// Point-in-time counters for a [`HasherPool`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Contexts acquired and not yet released
    pub outstanding: usize,
    /// Total finalize operations performed through this pool
    pub finalized: usize,
    /// Contexts currently waiting for reuse
    pub idle: usize,
}

impl HasherPool {
    /// Create an empty pool
    pub const fn new() -> Self {
        HasherPool {
            idle: parking_lot::const_mutex(Vec::new()),
            outstanding: AtomicUsize::new(0),
            finalized: AtomicUsize::new(0),
        }
    }

    /// Acquire a context, reusing an idle one when available
    pub fn get256(&self) -> PooledHasher<'_> {
        let hasher = self.idle.lock().pop().unwrap_or_else(Sha3_256::new);
        self.outstanding.fetch_add(1, Ordering::AcqRel);
        PooledHasher {
            pool: self,
            hasher: Some(hasher),
        }
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            outstanding: self.outstanding.load(Ordering::Acquire),
            finalized: self.finalized.load(Ordering::Acquire),
            idle: self.idle.lock().len(),
        }
    }

    fn put256(&self, mut hasher: Sha3_256) {
        Digest::reset(&mut hasher);
        let mut idle = self.idle.lock();
        if idle.len() < MAX_IDLE {
            idle.push(hasher);
        }
        drop(idle);
        self.outstanding.fetch_sub(1, Ordering::AcqRel);
    }
}

impl Default for HasherPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Exclusive handle on a pooled context, returned to its pool on drop
pub struct PooledHasher<'a> {
    pool: &'a HasherPool,
    // Always `Some` until drop.
    hasher: Option<Sha3_256>,
}

impl PooledHasher<'_> {
    /// Feed bytes into the running hash
    pub fn update(&mut self, data: &[u8]) {
        if let Some(hasher) = self.hasher.as_mut() {
            Digest::update(hasher, data);
        }
    }

    /// Finalize into a [`Hash`] and release the context back to the pool
    pub fn finalize(mut self) -> Hash {
        let mut out = [0u8; 32];
        if let Some(hasher) = self.hasher.as_mut() {
            out.copy_from_slice(&hasher.finalize_reset());
        }
        self.pool.finalized.fetch_add(1, Ordering::AcqRel);
        Hash::from_bytes(out)
    }
}

impl io::Write for PooledHasher<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for PooledHasher<'_> {
    fn drop(&mut self) {
        if let Some(hasher) = self.hasher.take() {
            self.pool.put256(hasher);
        }
    }
}
