use std::fmt;

use serde::{Deserialize, Serialize};

use crate::utils;

/// An account address as reported by the wallet app.
///
/// The bridge never parses or validates the contents; whatever encoding the
/// connected wallet speaks (base32 for Algorand wallets) passes through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Truncated display form (`ABCDEF...WXYZ`) for UI labels
    pub fn short(&self) -> String {
        utils::format_address(&self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Address {
    fn from(address: &str) -> Self {
        Self(address.to_string())
    }
}

impl From<String> for Address {
    fn from(address: String) -> Self {
        Self(address)
    }
}

/// An unsigned transaction payload built outside the bridge.
///
/// Carried as opaque bytes; the bridge forwards them to the wallet without
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction(Vec<u8>);

impl UnsignedTransaction {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// A signed transaction payload as returned by the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedTransaction(Vec<u8>);

impl SignedTransaction {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

/// One entry of a signing request: the transaction plus the addresses
/// expected to sign it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerTransaction {
    /// The transaction to sign
    pub transaction: UnsignedTransaction,

    /// Addresses the wallet should sign with; empty means sign-by-others
    /// (the entry is part of a group but needs no signature here)
    pub signers: Vec<Address>,
}

impl SignerTransaction {
    /// Single-signer entry, the shape `WalletBridge::sign_transaction` submits
    pub fn single(transaction: UnsignedTransaction, signer: Address) -> Self {
        Self {
            transaction,
            signers: vec![signer],
        }
    }
}
