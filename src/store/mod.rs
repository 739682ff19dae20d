//! Token store: mapping from token string to a presence marker.
//!
//! Every implementation must make `delete` a single indivisible
//! check-presence-and-remove. Of N concurrent deletes on the same key
//! exactly one returns `Ok(())`, the rest return [`TokenError::NotFound`].

pub mod locked_map_store;
pub mod map_store;

use serde::{Deserialize, Serialize};

use crate::errors::TokenError;
use crate::helpers::time::now_u64;

pub use locked_map_store::LockedMapStore;
pub use map_store::MapStore;

/// Presence marker stored under each issued token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokenEntry {
    pub issued_at_unix_ts: u64, // UNIX TIMESTAMP
}

impl TokenEntry {
    pub fn new(issued_at_unix_ts: u64) -> Self {
        Self { issued_at_unix_ts }
    }

    pub fn issued_now() -> Self {
        Self::new(now_u64())
    }
}

pub trait TokenStore: Send + Sync {
    /// Non-mutating lookup, `None` when absent.
    fn get(&self, key: &str) -> Option<TokenEntry>;

    /// Unconditional insert, last write wins.
    fn put(&self, key: String, value: TokenEntry);

    /// Atomically remove `key`, failing with `NotFound` when it was absent.
    fn delete(&self, key: &str) -> Result<(), TokenError>;
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreKind {
    #[default]
    Map,
    LockedMap,
}

impl StoreKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKind::Map => "map",
            StoreKind::LockedMap => "locked_map",
        }
    }
}

pub fn build_store(kind: StoreKind) -> Box<dyn TokenStore> {
    match kind {
        StoreKind::Map => Box::new(MapStore::new()),
        StoreKind::LockedMap => Box::new(LockedMapStore::new()),
    }
}
