// Public AlgoNode endpoints; no API token required
pub const TESTNET_ALGOD_URL: &str = "https://testnet-api.algonode.cloud";
pub const MAINNET_ALGOD_URL: &str = "https://mainnet-api.algonode.cloud";

// Application ID of the marketplace contract deployed on TestNet
pub const DEFAULT_APP_ID: u64 = 740889434;
