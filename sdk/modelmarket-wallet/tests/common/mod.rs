#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::{broadcast, oneshot};

use modelmarket_wallet::{
    Address, SignedTransaction, SignerTransaction, TransportError, WalletTransport,
};

pub type AddressResult = Result<Vec<Address>, TransportError>;
pub type SignResult = Result<Vec<SignedTransaction>, TransportError>;

/// Scripted in-memory wallet for driving the bridge in tests.
///
/// Each operation pops its next scripted result; counters record how often
/// the bridge reached the transport. `fire_disconnect` plays the wallet app
/// revoking the session remotely.
pub struct MockTransport {
    reconnect_results: Mutex<VecDeque<AddressResult>>,
    connect_results: Mutex<VecDeque<AddressResult>>,
    sign_results: Mutex<VecDeque<SignResult>>,
    sign_requests: Mutex<Vec<Vec<SignerTransaction>>>,
    sign_gate: Mutex<Option<oneshot::Receiver<()>>>,
    reconnect_calls: AtomicUsize,
    connect_calls: AtomicUsize,
    sign_calls: AtomicUsize,
    disconnect_calls: AtomicUsize,
    disconnect_events: broadcast::Sender<()>,
}

impl MockTransport {
    pub fn new() -> Self {
        let (disconnect_events, _) = broadcast::channel(8);
        Self {
            reconnect_results: Mutex::new(VecDeque::new()),
            connect_results: Mutex::new(VecDeque::new()),
            sign_results: Mutex::new(VecDeque::new()),
            sign_requests: Mutex::new(Vec::new()),
            sign_gate: Mutex::new(None),
            reconnect_calls: AtomicUsize::new(0),
            connect_calls: AtomicUsize::new(0),
            sign_calls: AtomicUsize::new(0),
            disconnect_calls: AtomicUsize::new(0),
            disconnect_events,
        }
    }

    pub fn push_reconnect(&self, result: AddressResult) {
        self.reconnect_results.lock().unwrap().push_back(result);
    }

    pub fn push_connect(&self, result: AddressResult) {
        self.connect_results.lock().unwrap().push_back(result);
    }

    pub fn push_sign(&self, result: SignResult) {
        self.sign_results.lock().unwrap().push_back(result);
    }

    /// Hold the next sign call open until the returned sender fires
    pub fn gate_next_sign(&self) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        *self.sign_gate.lock().unwrap() = Some(gate);
        release
    }

    /// Simulate the wallet app revoking the session
    pub fn fire_disconnect(&self) {
        let _ = self.disconnect_events.send(());
    }

    /// Live subscriptions on the disconnect channel
    pub fn disconnect_subscriber_count(&self) -> usize {
        self.disconnect_events.receiver_count()
    }

    pub fn reconnect_calls(&self) -> usize {
        self.reconnect_calls.load(Ordering::SeqCst)
    }

    pub fn connect_calls(&self) -> usize {
        self.connect_calls.load(Ordering::SeqCst)
    }

    pub fn sign_calls(&self) -> usize {
        self.sign_calls.load(Ordering::SeqCst)
    }

    pub fn disconnect_calls(&self) -> usize {
        self.disconnect_calls.load(Ordering::SeqCst)
    }

    /// The most recent group submitted through `sign_transactions`
    pub fn last_sign_request(&self) -> Option<Vec<SignerTransaction>> {
        self.sign_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl WalletTransport for MockTransport {
    async fn reconnect_session(&self) -> AddressResult {
        self.reconnect_calls.fetch_add(1, Ordering::SeqCst);
        self.reconnect_results
            .lock()
            .unwrap()
            .pop_front()
            // Unscripted means no prior session to resume
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn connect(&self) -> AddressResult {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        self.connect_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::channel("no scripted connect result")))
    }

    fn disconnect(&self) {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
    }

    async fn sign_transactions(&self, group: Vec<SignerTransaction>) -> SignResult {
        self.sign_calls.fetch_add(1, Ordering::SeqCst);
        self.sign_requests.lock().unwrap().push(group);
        let gate = self.sign_gate.lock().unwrap().take();
        if let Some(gate) = gate {
            let _ = gate.await;
        }
        self.sign_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::channel("no scripted sign result")))
    }

    fn subscribe_disconnects(&self) -> broadcast::Receiver<()> {
        self.disconnect_events.subscribe()
    }
}

/// A base32-looking test address padded to the usual 58 characters
pub fn test_address(tag: &str) -> Address {
    Address::from(format!("{:A<58}", tag.to_uppercase()))
}
