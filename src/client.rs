//! High-level client: `MonitorClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::market::client::Markets;
use crate::domain::network::client::Network;
use crate::domain::tvl::client::Tvl;
use crate::error::MonitorError;
use crate::http::{Endpoints, MonitorHttp};
use crate::network::{DEFAULT_COINS, REQUEST_TIMEOUT};
use crate::shared::CoinId;

use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::domain::market::client::Markets as MarketsClient;
pub use crate::domain::network::client::Network as NetworkClient;
pub use crate::domain::tvl::client::Tvl as TvlClient;

/// The entry point for upstream data.
///
/// `client.markets()`, `client.network()`, `client.tvl()`.
#[derive(Debug, Clone)]
pub struct MonitorClient {
    pub(crate) http: MonitorHttp,
    /// Coin set used by `markets().prices()`.
    pub(crate) coins: Vec<CoinId>,
}

impl MonitorClient {
    pub fn builder() -> MonitorClientBuilder {
        MonitorClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn markets(&self) -> Markets<'_> {
        Markets { client: self }
    }

    pub fn network(&self) -> Network<'_> {
        Network { client: self }
    }

    pub fn tvl(&self) -> Tvl<'_> {
        Tvl { client: self }
    }

    pub fn coins(&self) -> &[CoinId] {
        &self.coins
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct MonitorClientBuilder {
    endpoints: Endpoints,
    coins: Vec<CoinId>,
    timeout: Duration,
}

impl Default for MonitorClientBuilder {
    fn default() -> Self {
        Self {
            endpoints: Endpoints::default(),
            coins: DEFAULT_COINS.iter().copied().map(CoinId::from).collect(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl MonitorClientBuilder {
    pub fn coingecko_url(mut self, url: &str) -> Self {
        self.endpoints.coingecko_url = url.to_string();
        self
    }

    pub fn etherscan_url(mut self, url: &str) -> Self {
        self.endpoints.etherscan_url = url.to_string();
        self
    }

    pub fn etherscan_api_key(mut self, key: &str) -> Self {
        self.endpoints.etherscan_api_key = key.to_string();
        self
    }

    pub fn llama_url(mut self, url: &str) -> Self {
        self.endpoints.llama_url = url.to_string();
        self
    }

    pub fn coins<I, C>(mut self, coins: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<CoinId>,
    {
        self.coins = coins.into_iter().map(Into::into).collect();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<MonitorClient, MonitorError> {
        Ok(MonitorClient {
            http: MonitorHttp::with_timeout(self.endpoints, self.timeout)?,
            coins: self.coins,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::network::NetworkStats;

    /// Every endpoint points at a closed local port so requests fail fast.
    fn offline_client() -> MonitorClient {
        MonitorClient::builder()
            .coingecko_url("http://127.0.0.1:1/api/v3")
            .etherscan_url("http://127.0.0.1:1/api")
            .llama_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = MonitorClient::builder().build().unwrap();
        let ids: Vec<_> = client.coins().iter().map(CoinId::as_str).collect();
        assert_eq!(
            ids,
            ["ethereum", "uniswap", "compound-governance-token", "aave"]
        );
        assert_eq!(
            client.http.endpoints().coingecko_url,
            "https://api.coingecko.com/api/v3"
        );
    }

    #[test]
    fn test_builder_custom_coins() {
        let client = MonitorClient::builder()
            .coins(["bitcoin", "solana"])
            .build()
            .unwrap();
        assert_eq!(client.coins().len(), 2);
    }

    #[tokio::test]
    async fn test_network_stats_fall_back_on_failure() {
        let stats = offline_client().network().stats().await;
        assert_eq!(stats, NetworkStats::fallback());
        assert_eq!(stats.gas_price, 25.0);
        assert_eq!(stats.eth_supply, "120000000");
    }

    #[tokio::test]
    async fn test_tvl_falls_back_to_empty() {
        assert!(offline_client().tvl().top().await.is_empty());
    }

    #[tokio::test]
    async fn test_market_data_failure_propagates() {
        assert!(offline_client().markets().prices().await.is_err());
    }
}
