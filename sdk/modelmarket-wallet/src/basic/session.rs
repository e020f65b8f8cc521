use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, RwLock};

use crate::types::Address;

// Buffered transitions per subscriber before lagging kicks in
const SESSION_EVENT_CAPACITY: usize = 16;

/// Snapshot of the wallet session.
///
/// Connectedness is derived from account presence rather than stored beside
/// it, so a session can only ever be connected-with-account or empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The authorized account, absent while disconnected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<Address>,
}

impl Session {
    /// Whether a wallet session is active
    pub fn connected(&self) -> bool {
        self.account.is_some()
    }
}

/// Session transition broadcast to subscribers
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// An account was authorized, by interactive connect or silent resume
    Connected(Address),

    /// The session ended, locally or from the wallet app side
    Disconnected,
}

/// Shared session record behind every bridge clone.
///
/// Transition events are emitted while the write guard is held so the event
/// order always matches the state order.
#[derive(Clone)]
pub(crate) struct SessionState {
    account: Arc<RwLock<Option<Address>>>,
    events: broadcast::Sender<SessionEvent>,
}

impl SessionState {
    pub(crate) fn new() -> Self {
        let (events, _) = broadcast::channel(SESSION_EVENT_CAPACITY);
        Self {
            account: Arc::new(RwLock::new(None)),
            events,
        }
    }

    pub(crate) async fn snapshot(&self) -> Session {
        Session {
            account: self.account.read().await.clone(),
        }
    }

    pub(crate) async fn account(&self) -> Option<Address> {
        self.account.read().await.clone()
    }

    /// Install `address` as the authorized account. No event when the same
    /// account is already connected.
    pub(crate) async fn set_account(&self, address: Address) {
        let mut slot = self.account.write().await;
        if slot.as_ref() == Some(&address) {
            return;
        }
        *slot = Some(address.clone());
        let _ = self.events.send(SessionEvent::Connected(address));
    }

    /// Clear the session. Returns false (and emits nothing) when it was
    /// already empty.
    pub(crate) async fn clear(&self) -> bool {
        let mut slot = self.account.write().await;
        if slot.take().is_some() {
            let _ = self.events.send(SessionEvent::Disconnected);
            true
        } else {
            false
        }
    }

    pub(crate) fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }
}
