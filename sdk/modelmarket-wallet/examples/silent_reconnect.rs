// Example: Resuming a wallet session and reacting to a remote disconnect
//
// This example demonstrates how to:
// 1. Resume a previously authorized session during initialize
// 2. Subscribe to session transitions
// 3. Handle the wallet app revoking the session from its side
//
// The transport simulates a wallet that kept the authorization from a prior
// run and later revokes it, the way a user taps "disconnect" inside the
// wallet app while the dApp is open.

use async_trait::async_trait;
use tokio::sync::broadcast;

use modelmarket_wallet::{
    Address, SessionEvent, SignedTransaction, SignerTransaction, TransportError, WalletBridge,
    WalletTransport,
};

struct PersistedSessionWallet {
    address: Address,
    disconnects: broadcast::Sender<()>,
}

impl PersistedSessionWallet {
    fn new(address: &str) -> Self {
        let (disconnects, _) = broadcast::channel(4);
        Self {
            address: Address::from(address),
            disconnects,
        }
    }

    /// The user revokes the dApp from inside the wallet app
    fn revoke(&self) {
        let _ = self.disconnects.send(());
    }
}

#[async_trait]
impl WalletTransport for PersistedSessionWallet {
    async fn reconnect_session(&self) -> Result<Vec<Address>, TransportError> {
        // The authorization from the previous run is still valid
        Ok(vec![self.address.clone()])
    }

    async fn connect(&self) -> Result<Vec<Address>, TransportError> {
        Ok(vec![self.address.clone()])
    }

    fn disconnect(&self) {}

    async fn sign_transactions(
        &self,
        _group: Vec<SignerTransaction>,
    ) -> Result<Vec<SignedTransaction>, TransportError> {
        Err(TransportError::channel("signing not used in this example"))
    }

    fn subscribe_disconnects(&self) -> broadcast::Receiver<()> {
        self.disconnects.subscribe()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Initialize resumes the persisted session without user interaction
    let wallet = PersistedSessionWallet::new(
        "MODELMKTAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA4321",
    );
    let bridge = WalletBridge::new(wallet);
    bridge.initialize().await;

    match bridge.account().await {
        Some(account) => println!("Resumed session as {}", account.short()),
        None => println!("No prior session; user must connect interactively"),
    }

    // 2. Watch for session transitions
    let mut events = bridge.subscribe();

    // 3. The wallet app revokes the session remotely
    bridge.transport().revoke();
    match events.recv().await? {
        SessionEvent::Disconnected => println!("Wallet revoked the session"),
        SessionEvent::Connected(account) => println!("Unexpected connect: {account}"),
    }
    println!("connected: {}", bridge.is_connected().await);

    Ok(())
}
