//! # Storage Layer
//!
//! The roster is persisted as a single opaque string under a fixed key. The
//! [`BlobStore`] trait is that key → string contract and nothing more: it does
//! not know what a student is.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per key: `{data_dir}/{key}.json`
//!   - Atomic writes (temp file + rename)
//!   - Optional quota, checked before anything touches disk
//!
//! - [`memory::MemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Can simulate write failures and quotas
//!
//! ## Storage Format
//!
//! ```text
//! {data_dir}/
//! ├── students_v1.json   # JSON array of students, insertion order
//! └── config.json        # RosterConfig
//! ```

use crate::error::PersistenceError;

pub mod fs;
pub mod memory;

/// Default key the roster is stored under.
pub const DEFAULT_KEY: &str = "students_v1";

/// Abstract key → string blob storage.
pub trait BlobStore {
    /// Read the blob stored under `key`, `None` if nothing was ever written.
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the blob stored under `key`.
    ///
    /// Either the whole value is stored or the previous value is left intact.
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

/// Rejects keys that could escape the storage namespace.
pub fn check_key(key: &str) -> Result<(), PersistenceError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(PersistenceError::InvalidKey(key.to_string()))
    }
}

/// Fails with [`PersistenceError::QuotaExceeded`] when `value` is over `quota`.
pub fn check_quota(value: &str, quota: Option<usize>) -> Result<(), PersistenceError> {
    match quota {
        Some(limit) if value.len() > limit => Err(PersistenceError::QuotaExceeded {
            size: value.len(),
            limit,
        }),
        _ => Ok(()),
    }
}
