use std::sync::{Arc, Mutex, MutexGuard};

use tokio::sync::broadcast;
use tokio::task::JoinHandle;

use crate::advanced::signing;
use crate::basic::session::{Session, SessionEvent, SessionState};
use crate::core::transport::{TransportError, WalletTransport};
use crate::error::{Result, WalletBridgeError};
use crate::types::{Address, SignedTransaction, SignerTransaction, UnsignedTransaction};

/// The single authority for "is a wallet connected, as whom, and can I get a
/// signature".
///
/// One bridge is built at application start with the transport injected, then
/// cloned into every consumer; clones share one session, so a connect
/// observed through any clone is visible through all of them. There is no
/// process-wide instance: anything that needs wallet state receives a bridge
/// clone explicitly.
pub struct WalletBridge<T: WalletTransport> {
    inner: Arc<BridgeInner<T>>,
}

struct BridgeInner<T> {
    transport: T,
    state: SessionState,
    listener: Mutex<Option<JoinHandle<()>>>,
}

impl<T> BridgeInner<T> {
    fn listener_slot(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        match self.listener.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl<T> Drop for BridgeInner<T> {
    fn drop(&mut self) {
        if let Some(task) = self.listener_slot().take() {
            task.abort();
        }
    }
}

impl<T: WalletTransport> Clone for WalletBridge<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: WalletTransport> WalletBridge<T> {
    /// Create a disconnected bridge around `transport`.
    ///
    /// No transport call is made here; call `initialize` to resume a prior
    /// session and start watching for wallet-side disconnects.
    pub fn new(transport: T) -> Self {
        Self {
            inner: Arc::new(BridgeInner {
                transport,
                state: SessionState::new(),
                listener: Mutex::new(None),
            }),
        }
    }

    /// Best-effort startup: resume any previously authorized session and
    /// start the wallet-side disconnect watcher.
    ///
    /// Resumption failures are logged and swallowed; the bridge simply
    /// starts disconnected. Calling this again replaces the watcher rather
    /// than stacking a second one.
    pub async fn initialize(&self) {
        match self.try_reconnect().await {
            Ok(Some(address)) => {
                tracing::debug!(account = %address.short(), "wallet session resumed");
            }
            Ok(None) => {
                tracing::debug!("no previous wallet session to resume");
            }
            Err(error) => {
                tracing::warn!(%error, "could not resume wallet session");
            }
        }
        self.install_disconnect_listener();
    }

    async fn try_reconnect(&self) -> Result<Option<Address>> {
        let addresses = self
            .inner
            .transport
            .reconnect_session()
            .await
            .map_err(WalletBridgeError::ReconnectFailed)?;
        match addresses.into_iter().next() {
            Some(address) => {
                self.inner.state.set_account(address.clone()).await;
                Ok(Some(address))
            }
            None => Ok(None),
        }
    }

    fn install_disconnect_listener(&self) {
        let mut disconnects = self.inner.transport.subscribe_disconnects();
        let state = self.inner.state.clone();
        let task = tokio::spawn(async move {
            loop {
                match disconnects.recv().await {
                    Ok(()) => {
                        tracing::debug!("wallet reported disconnect, clearing session");
                        state.clear().await;
                    }
                    // Missed events all mean the same thing
                    Err(broadcast::error::RecvError::Lagged(_)) => {
                        state.clear().await;
                    }
                    // Transport dropped its sender
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        });
        if let Some(previous) = self.inner.listener_slot().replace(task) {
            previous.abort();
        }
    }

    /// Interactive connection handshake with the wallet app.
    ///
    /// Suspends until the user approves or declines out of band. On approval
    /// the first authorized address becomes the session account and is
    /// returned; a wallet reporting zero addresses is a no-op (`Ok(None)`).
    /// On failure the session is left untouched and the error is returned
    /// for the caller to present.
    pub async fn connect(&self) -> Result<Option<Address>> {
        let addresses = self
            .inner
            .transport
            .connect()
            .await
            .map_err(WalletBridgeError::ConnectRejected)?;
        match addresses.into_iter().next() {
            Some(address) => {
                self.inner.state.set_account(address.clone()).await;
                tracing::debug!(account = %address.short(), "wallet connected");
                Ok(Some(address))
            }
            None => {
                tracing::debug!("wallet approved connection with no addresses");
                Ok(None)
            }
        }
    }

    /// Disconnect the wallet and clear the session.
    ///
    /// The transport notification is fire-and-forget; local state clears
    /// immediately regardless of what the wallet does with it. Calling this
    /// while already disconnected changes nothing.
    pub async fn disconnect(&self) {
        self.inner.transport.disconnect();
        if self.inner.state.clear().await {
            tracing::debug!("wallet disconnected");
        }
    }

    /// Sign a single transaction with the session account.
    ///
    /// The transaction passes through opaque, paired with the session
    /// account as sole signer, and exactly one signed payload comes back.
    /// Fails with `Unauthenticated` before any transport call when no
    /// account is connected; a signing failure leaves the session untouched.
    pub async fn sign_transaction(
        &self,
        transaction: UnsignedTransaction,
    ) -> Result<SignedTransaction> {
        let account = self
            .inner
            .state
            .account()
            .await
            .ok_or(WalletBridgeError::Unauthenticated)?;
        let group = vec![SignerTransaction::single(transaction, account)];
        let signed = signing::sign_transaction_group(&self.inner.transport, group).await?;
        signed.into_iter().next().ok_or_else(|| {
            WalletBridgeError::SigningFailed(TransportError::channel(
                "wallet returned no signed transaction",
            ))
        })
    }

    /// Current session snapshot
    pub async fn session(&self) -> Session {
        self.inner.state.snapshot().await
    }

    /// The connected account, if any
    pub async fn account(&self) -> Option<Address> {
        self.inner.state.account().await
    }

    /// Whether a wallet session is active
    pub async fn is_connected(&self) -> bool {
        self.inner.state.account().await.is_some()
    }

    /// Subscribe to session transitions.
    ///
    /// Events are emitted only on actual change: connecting an already
    /// connected account or disconnecting an empty session emits nothing.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.inner.state.subscribe()
    }

    /// The transport this bridge drives, for advanced flows such as
    /// `advanced::signing::sign_transaction_group`
    pub fn transport(&self) -> &T {
        &self.inner.transport
    }

    /// Stop the wallet-side disconnect watcher.
    ///
    /// Dropping the last bridge clone does the same; this is for callers
    /// tearing down explicitly while clones are still alive.
    pub fn shutdown(&self) {
        if let Some(task) = self.inner.listener_slot().take() {
            task.abort();
        }
    }
}
