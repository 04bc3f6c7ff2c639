//! Dashboard feed: the three upstream pollers behind one handle.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::watch;

use crate::client::MonitorClient;
use crate::domain::market::MarketData;
use crate::domain::network::NetworkStats;
use crate::domain::tvl::ProtocolTvl;
use crate::error::FetchError;
use crate::live::poller::{Refreshable, ResourcePoller};
use crate::network::{MARKET_REFRESH, NETWORK_REFRESH, TVL_REFRESH};
use crate::shared::ResourceKind;

/// Polling cadence per resource.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub market: Duration,
    pub network: Duration,
    pub tvl: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            market: MARKET_REFRESH,
            network: NETWORK_REFRESH,
            tvl: TVL_REFRESH,
        }
    }
}

/// Market quotes, network stats and DeFi TVL, each refreshed on its own
/// interval. Dropping the feed stops all three.
///
/// Market fetch failures surface as `last_error` on the market resource.
/// Network stats and TVL use the fallback-on-error sub-client calls, so
/// their resources always carry a value after the first fetch.
pub struct DashboardFeed {
    market: ResourcePoller<MarketData>,
    network: ResourcePoller<NetworkStats>,
    tvl: ResourcePoller<Vec<ProtocolTvl>>,
}

impl DashboardFeed {
    /// Start polling. Must be called inside a tokio runtime.
    pub fn start(client: MonitorClient, config: PollConfig) -> Self {
        let client = Arc::new(client);

        let c = Arc::clone(&client);
        let market = ResourcePoller::spawn(ResourceKind::MarketData, config.market, move || {
            let c = Arc::clone(&c);
            async move { c.markets().prices().await }
        });

        let c = Arc::clone(&client);
        let network = ResourcePoller::spawn(ResourceKind::NetworkStats, config.network, move || {
            let c = Arc::clone(&c);
            async move { Ok::<_, FetchError>(c.network().stats().await) }
        });

        let c = client;
        let tvl = ResourcePoller::spawn(ResourceKind::DefiTvl, config.tvl, move || {
            let c = Arc::clone(&c);
            async move { Ok::<_, FetchError>(c.tvl().top().await) }
        });

        tracing::info!("Dashboard feed started");
        Self {
            market,
            network,
            tvl,
        }
    }

    pub fn market(&self) -> Refreshable<MarketData> {
        self.market.snapshot()
    }

    pub fn network(&self) -> Refreshable<NetworkStats> {
        self.network.snapshot()
    }

    pub fn tvl(&self) -> Refreshable<Vec<ProtocolTvl>> {
        self.tvl.snapshot()
    }

    pub fn subscribe_market(&self) -> watch::Receiver<Refreshable<MarketData>> {
        self.market.subscribe()
    }

    pub fn subscribe_network(&self) -> watch::Receiver<Refreshable<NetworkStats>> {
        self.network.subscribe()
    }

    pub fn subscribe_tvl(&self) -> watch::Receiver<Refreshable<Vec<ProtocolTvl>>> {
        self.tvl.subscribe()
    }

    /// True while any of the three resources has a fetch in flight.
    pub fn is_loading(&self) -> bool {
        self.market.is_loading() || self.network.is_loading() || self.tvl.is_loading()
    }

    /// Most recent applied fetch outcome, success or failure, across all
    /// three resources.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        [
            self.market.snapshot().checked_at,
            self.network.snapshot().checked_at,
            self.tvl.snapshot().checked_at,
        ]
        .into_iter()
        .flatten()
        .max()
    }

    pub async fn shutdown(&mut self) {
        self.market.shutdown().await;
        self.network.shutdown().await;
        self.tvl.shutdown().await;
        tracing::info!("Dashboard feed stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn offline_client() -> MonitorClient {
        MonitorClient::builder()
            .coingecko_url("http://127.0.0.1:1/api/v3")
            .etherscan_url("http://127.0.0.1:1/api")
            .llama_url("http://127.0.0.1:1")
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn test_offline_feed_is_fail_soft() {
        let mut feed = DashboardFeed::start(offline_client(), PollConfig::default());

        let market = feed
            .subscribe_market()
            .wait_for(|s| s.last_error.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(market.value, None);
        assert!(market.checked_at.is_some());
        assert!(feed.last_update() >= market.checked_at);

        let network = feed
            .subscribe_network()
            .wait_for(|s| s.value.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(network.value, Some(NetworkStats::fallback()));
        assert_eq!(network.last_error, None);

        let tvl = feed
            .subscribe_tvl()
            .wait_for(|s| s.value.is_some())
            .await
            .unwrap()
            .clone();
        assert_eq!(tvl.value, Some(Vec::new()));

        assert!(feed.last_update().is_some());
        assert!(!feed.is_loading());
        feed.shutdown().await;
    }
}
