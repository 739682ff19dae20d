use once_cell::sync::OnceCell;
use tracing::{info, warn};

use crate::errors::TokenError;
use crate::generator::TokenBuilder;
use crate::service::TokenService;
use crate::store::TokenStore;

// One shared token namespace per process.
static TOKEN_SERVICE_INSTANCE: OnceCell<TokenService> = OnceCell::new();

/// Process-wide service backed by the default store and generator.
///
/// The first accessor call initializes the instance; if a custom one was
/// installed earlier, that one is returned.
pub fn default_token_service() -> &'static TokenService {
    TOKEN_SERVICE_INSTANCE.get_or_init(|| {
        info!("Initializing default TokenService ...");
        TokenService::default()
    })
}

/// Process-wide service built from `store` and `builder`.
///
/// First caller wins: when an instance already exists, the arguments are
/// dropped and the existing instance is returned.
pub fn token_service_with(
    store: Box<dyn TokenStore>,
    builder: Box<dyn TokenBuilder>,
) -> &'static TokenService {
    let mut installed = false;
    let service = TOKEN_SERVICE_INSTANCE.get_or_init(|| {
        installed = true;
        info!("Initializing custom TokenService ...");
        TokenService::new(store, builder)
    });
    if !installed {
        warn!("TokenService already initialized, custom store/generator ignored");
    }
    service
}

/// Strict variant of [`token_service_with`]: fails with
/// `AlreadyInitialized` instead of ignoring the arguments.
pub fn try_init_token_service(
    store: Box<dyn TokenStore>,
    builder: Box<dyn TokenBuilder>,
) -> Result<&'static TokenService, TokenError> {
    TOKEN_SERVICE_INSTANCE
        .set(TokenService::new(store, builder))
        .map_err(|_| TokenError::AlreadyInitialized)?;
    TOKEN_SERVICE_INSTANCE
        .get()
        .ok_or(TokenError::AlreadyInitialized)
}
