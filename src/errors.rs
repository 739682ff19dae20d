use thiserror::Error;

/// Errors produced by the token core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The token was never issued or has already been redeemed.
    /// The two cases are indistinguishable once redemption removes the entry.
    #[error("token not exist")]
    NotFound,

    /// Returned only by the strict process-wide initializer.
    #[error("token service already initialized")]
    AlreadyInitialized,
}
