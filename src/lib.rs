//! # Idempotence Token Library
//!
//! Issues opaque tokens and redeems each of them at most once, so a caller
//! can tag an action with a token and later confirm the action has not
//! already been processed.
//!
//! Modules:
//! - `store` — token store trait and in-memory variants with atomic delete
//! - `generator` — pluggable unique token generators
//! - `service` — issue/redeem lifecycle and the process-wide instance
//! - `config`, `server`, `observability` — host wiring for the binary

pub mod config;
pub mod errors;
pub mod generator;
pub mod helpers;
pub mod observability;
pub mod server;
pub mod service;
pub mod store;
pub mod tests;
pub mod utils;

pub use crate::config::types::ServiceConfig;
pub use crate::errors::TokenError;
pub use crate::generator::TokenBuilder;
pub use crate::service::{default_token_service, token_service_with, try_init_token_service, TokenService};
pub use crate::store::{TokenEntry, TokenStore};
