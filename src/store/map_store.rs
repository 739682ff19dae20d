use dashmap::DashMap;

use crate::errors::TokenError;
use crate::store::{TokenEntry, TokenStore};

/// Default in-memory store: token -> entry.
///
/// `DashMap::remove` takes the shard write lock for the key, so the
/// presence check and the removal happen as one step.
#[derive(Debug, Default)]
pub struct MapStore {
    inner: DashMap<String, TokenEntry>,
}

impl MapStore {
    pub fn new() -> Self {
        Self {
            inner: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl TokenStore for MapStore {
    fn get(&self, key: &str) -> Option<TokenEntry> {
        self.inner.get(key).map(|entry| *entry.value())
    }

    fn put(&self, key: String, value: TokenEntry) {
        self.inner.insert(key, value);
    }

    fn delete(&self, key: &str) -> Result<(), TokenError> {
        self.inner
            .remove(key)
            .map(|_| ())
            .ok_or(TokenError::NotFound)
    }
}
