//! Upstream endpoints and default cadences.

use std::time::Duration;

/// CoinGecko REST API base URL.
pub const DEFAULT_COINGECKO_URL: &str = "https://api.coingecko.com/api/v3";

/// Etherscan REST API base URL.
pub const DEFAULT_ETHERSCAN_URL: &str = "https://api.etherscan.io/api";

/// DefiLlama REST API base URL.
pub const DEFAULT_LLAMA_URL: &str = "https://api.llama.fi";

/// Placeholder key sent to Etherscan when none is configured.
pub const DEFAULT_ETHERSCAN_API_KEY: &str = "YourEtherscanAPIKey";

/// Per-request timeout for every upstream call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Coins tracked by the market poller (CoinGecko ids).
pub const DEFAULT_COINS: [&str; 4] = [
    "ethereum",
    "uniswap",
    "compound-governance-token",
    "aave",
];

/// Number of protocols kept from the DefiLlama list.
pub const TOP_PROTOCOLS: usize = 10;

pub const MARKET_REFRESH: Duration = Duration::from_secs(30);
pub const NETWORK_REFRESH: Duration = Duration::from_secs(60);
pub const TVL_REFRESH: Duration = Duration::from_secs(300);
