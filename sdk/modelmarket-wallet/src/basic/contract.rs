use serde::{Deserialize, Serialize};

use crate::basic::session::Session;
use crate::config::{AlgodConfig, BridgeConfig};
use crate::types::Address;

/// Connection settings for the marketplace application contract.
///
/// This is wiring for an externally generated contract client, not the
/// client itself. It pairs the node endpoint and deployed application ID
/// with the session account that chain writes would be sent from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractBinding {
    /// On-chain application ID of the marketplace contract
    pub app_id: u64,

    /// Algod node the contract client reads through
    pub algod: AlgodConfig,

    /// Sender for chain-writing calls; absent while no wallet session is
    /// active, which keeps write actions disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sender: Option<Address>,
}

impl ContractBinding {
    /// Read-only binding with no sender attached
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            app_id: config.app_id,
            algod: config.algod.clone(),
            default_sender: None,
        }
    }

    /// Binding whose default sender mirrors the session account, so the
    /// binding follows connects and disconnects when rebuilt from the
    /// current session
    pub fn for_session(config: &BridgeConfig, session: &Session) -> Self {
        Self {
            default_sender: session.account.clone(),
            ..Self::new(config)
        }
    }

    /// Whether chain-writing calls can be built from this binding
    pub fn can_write(&self) -> bool {
        self.default_sender.is_some()
    }
}
