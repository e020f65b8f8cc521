use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

use crate::types::{Address, SignedTransaction, SignerTransaction};

/// Failure reported by a wallet transport.
///
/// `rejected` distinguishes an explicit decline inside the wallet app from a
/// channel failure (timeout, dropped relay connection). The bridge carries
/// the flag through unchanged so consumers can word their messaging.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    /// Human-readable description from the transport
    pub message: String,

    /// True when the user declined the request in the wallet app
    pub rejected: bool,
}

impl TransportError {
    /// Channel-level failure
    pub fn channel(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rejected: false,
        }
    }

    /// The user declined the request in the wallet app
    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rejected: true,
        }
    }
}

/// Channel to an external wallet app holding the user's keys.
///
/// Implementations wrap a concrete wallet protocol, typically a
/// WalletConnect-style relay; tests plug in an in-memory wallet. The bridge
/// drives this trait and owns all session bookkeeping; implementations only
/// move requests to the wallet and results back.
#[async_trait]
pub trait WalletTransport: Send + Sync {
    /// Resume a previously authorized session without user interaction.
    /// Returns the still-authorized addresses, possibly empty.
    async fn reconnect_session(&self) -> Result<Vec<Address>, TransportError>;

    /// Interactive connection handshake. Suspends until the user approves or
    /// declines in the wallet app; any timeout is the transport's to enforce.
    async fn connect(&self) -> Result<Vec<Address>, TransportError>;

    /// Fire-and-forget teardown notification. Must not block; a transport
    /// needing a network round trip performs it on its own task.
    fn disconnect(&self);

    /// Sign a transaction group in the wallet app. The response preserves
    /// request order.
    async fn sign_transactions(
        &self,
        group: Vec<SignerTransaction>,
    ) -> Result<Vec<SignedTransaction>, TransportError>;

    /// Subscribe to wallet-initiated disconnects (session revoked from the
    /// wallet app side). Every subscriber sees every event.
    fn subscribe_disconnects(&self) -> broadcast::Receiver<()>;
}
