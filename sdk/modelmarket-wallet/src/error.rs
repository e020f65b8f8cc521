use thiserror::Error;

use crate::core::transport::TransportError;

/// Errors surfaced by wallet bridge operations
#[derive(Debug, Error)]
pub enum WalletBridgeError {
    /// Silent session resumption failed. Produced and consumed inside
    /// `initialize`, which logs it and starts disconnected; callers never
    /// observe this variant.
    #[error("Wallet reconnection failed: {0}")]
    ReconnectFailed(#[source] TransportError),

    /// The interactive connection handshake failed or was declined in the
    /// wallet app
    #[error("Wallet connection rejected: {0}")]
    ConnectRejected(#[source] TransportError),

    /// A signing operation was attempted with no account connected
    #[error("No account connected")]
    Unauthenticated,

    /// The wallet failed or refused to sign the submitted transactions
    #[error("Transaction signing failed: {0}")]
    SigningFailed(#[source] TransportError),
}

/// Result type alias for bridge operations
pub type Result<T> = std::result::Result<T, WalletBridgeError>;
