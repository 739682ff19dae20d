use std::collections::HashMap;

use parking_lot::RwLock;

use crate::errors::TokenError;
use crate::store::{TokenEntry, TokenStore};

/// Single-lock store: token -> entry behind one `RwLock`.
///
/// `delete` holds the write guard across lookup and removal.
#[derive(Debug, Default)]
pub struct LockedMapStore {
    inner: RwLock<HashMap<String, TokenEntry>>,
}

impl LockedMapStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}

impl TokenStore for LockedMapStore {
    fn get(&self, key: &str) -> Option<TokenEntry> {
        self.inner.read().get(key).copied()
    }

    fn put(&self, key: String, value: TokenEntry) {
        self.inner.write().insert(key, value);
    }

    fn delete(&self, key: &str) -> Result<(), TokenError> {
        let mut guard = self.inner.write();
        guard.remove(key).map(|_| ()).ok_or(TokenError::NotFound)
    }
}
