//! Token lifecycle: issue (generate + put) and redeem (atomic delete).
//!
//! Per token: unissued -> issued -> consumed. Redeeming an unknown or
//! consumed token fails with [`TokenError::NotFound`].

pub mod global;

use crate::errors::TokenError;
use crate::generator::{TokenBuilder, UuidV7Token};
use crate::store::{MapStore, TokenEntry, TokenStore};

pub use global::{default_token_service, token_service_with, try_init_token_service};

pub struct TokenService {
    store: Box<dyn TokenStore>,
    builder: Box<dyn TokenBuilder>,
}

impl TokenService {
    pub fn new(store: Box<dyn TokenStore>, builder: Box<dyn TokenBuilder>) -> Self {
        Self { store, builder }
    }

    /// Generate a token and record it as issued.
    ///
    /// Generator uniqueness is trusted: a collision would silently
    /// overwrite the existing entry.
    pub fn issue_token(&self) -> String {
        let token = self.builder.build();
        self.store.put(token.clone(), TokenEntry::issued_now());
        token
    }

    /// Consume `token`. Succeeds at most once per issued token.
    pub fn redeem_token(&self, token: &str) -> Result<(), TokenError> {
        self.store.delete(token)
    }

    /// Entry of an issued, not yet redeemed token.
    pub fn lookup(&self, token: &str) -> Option<TokenEntry> {
        self.store.get(token)
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new(Box::new(MapStore::new()), Box::new(UuidV7Token))
    }
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService").finish_non_exhaustive()
    }
}
