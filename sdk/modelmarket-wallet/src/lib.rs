pub mod advanced;
pub mod basic;
pub mod config;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::bridge::WalletBridge;
pub use crate::basic::contract::ContractBinding;
pub use crate::basic::session::{Session, SessionEvent};
pub use crate::config::{AlgodConfig, BridgeConfig};
pub use crate::core::transport::{TransportError, WalletTransport};
pub use crate::error::{Result, WalletBridgeError};
pub use crate::types::{
    Address, SignedTransaction, SignerTransaction, UnsignedTransaction,
};
pub use crate::utils::format_address;
