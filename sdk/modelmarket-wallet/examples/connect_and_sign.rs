// Example: Connecting a wallet and signing a marketplace payment
//
// This example demonstrates how to:
// 1. Build a bridge around a wallet transport
// 2. Run the interactive connection handshake
// 3. Sign an opaque transaction with the session account
// 4. Disconnect and observe the cleared session
//
// The transport here is an in-memory wallet that approves everything
// instantly; a real application would plug in a WalletConnect-style bridge
// to a mobile wallet app.

use async_trait::async_trait;
use tokio::sync::broadcast;

use modelmarket_wallet::{
    Address, SignedTransaction, SignerTransaction, TransportError, UnsignedTransaction,
    WalletBridge, WalletTransport,
};

struct InstantApproveWallet {
    address: Address,
    disconnects: broadcast::Sender<()>,
}

impl InstantApproveWallet {
    fn new(address: &str) -> Self {
        let (disconnects, _) = broadcast::channel(4);
        Self {
            address: Address::from(address),
            disconnects,
        }
    }
}

#[async_trait]
impl WalletTransport for InstantApproveWallet {
    async fn reconnect_session(&self) -> Result<Vec<Address>, TransportError> {
        // Nothing persisted between runs
        Ok(Vec::new())
    }

    async fn connect(&self) -> Result<Vec<Address>, TransportError> {
        Ok(vec![self.address.clone()])
    }

    fn disconnect(&self) {}

    async fn sign_transactions(
        &self,
        group: Vec<SignerTransaction>,
    ) -> Result<Vec<SignedTransaction>, TransportError> {
        // "Sign" by appending a marker so the output is visibly different
        Ok(group
            .into_iter()
            .map(|entry| {
                let mut bytes = entry.transaction.into_bytes();
                bytes.extend_from_slice(b"+sig");
                SignedTransaction::new(bytes)
            })
            .collect())
    }

    fn subscribe_disconnects(&self) -> broadcast::Receiver<()> {
        self.disconnects.subscribe()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Build the bridge once at startup and run best-effort resume
    let wallet = InstantApproveWallet::new(
        "MODELMKTAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA4321",
    );
    let bridge = WalletBridge::new(wallet);
    bridge.initialize().await;
    println!("After initialize:");
    println!("  connected: {}", bridge.is_connected().await);

    // 2. Interactive connect (approved instantly by this wallet)
    let account = bridge.connect().await?.expect("wallet returned no address");
    println!("After connect:");
    println!("  connected: {}", bridge.is_connected().await);
    println!("  account:   {}", account.short());

    // 3. Sign a payment for a marketplace listing
    let payment = UnsignedTransaction::new(b"pay:model-42:5000000".to_vec());
    let signed = bridge.sign_transaction(payment).await?;
    println!("Signed payment:");
    println!("  bytes: {}", String::from_utf8_lossy(signed.as_bytes()));

    // 4. Disconnect clears the session immediately
    bridge.disconnect().await;
    println!("After disconnect:");
    println!("  connected: {}", bridge.is_connected().await);

    Ok(())
}
