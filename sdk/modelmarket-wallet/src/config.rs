use serde::{Deserialize, Serialize};

use crate::core::constants::{DEFAULT_APP_ID, MAINNET_ALGOD_URL, TESTNET_ALGOD_URL};

/// Algod node endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgodConfig {
    /// Base URL of the algod REST API
    pub url: String,

    /// API token; empty for public AlgoNode endpoints
    #[serde(default)]
    pub token: String,
}

impl AlgodConfig {
    /// Public TestNet endpoint
    pub fn testnet() -> Self {
        Self {
            url: TESTNET_ALGOD_URL.to_string(),
            token: String::new(),
        }
    }

    /// Public MainNet endpoint
    pub fn mainnet() -> Self {
        Self {
            url: MAINNET_ALGOD_URL.to_string(),
            token: String::new(),
        }
    }
}

impl Default for AlgodConfig {
    fn default() -> Self {
        Self::testnet()
    }
}

/// Bridge configuration: which node to read through and which marketplace
/// application chain writes target.
///
/// The defaults pin the TestNet deployment the dApp ships against; override
/// per environment by deserializing from app config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Node endpoint settings
    pub algod: AlgodConfig,

    /// Application ID of the marketplace contract
    pub app_id: u64,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            algod: AlgodConfig::default(),
            app_id: DEFAULT_APP_ID,
        }
    }
}
