//! Network sub-client: gas oracle + ETH supply, with fallback.

use crate::client::MonitorClient;
use crate::domain::network::NetworkStats;
use crate::error::FetchError;

/// Sub-client for network stats.
pub struct Network<'a> {
    pub(crate) client: &'a MonitorClient,
}

impl<'a> Network<'a> {
    /// Current gas price and supply. Never fails: any upstream error yields
    /// [`NetworkStats::fallback`].
    pub async fn stats(&self) -> NetworkStats {
        match self.try_stats().await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching network stats, using fallback");
                NetworkStats::fallback()
            }
        }
    }

    /// Both Etherscan calls are issued concurrently; either failing fails the
    /// whole fetch.
    pub async fn try_stats(&self) -> Result<NetworkStats, FetchError> {
        let (gas, supply) = futures_util::future::try_join(
            self.client.http.get_gas_oracle(),
            self.client.http.get_eth_supply(),
        )
        .await?;

        Ok(NetworkStats::from_parts(
            gas.proposed_gas_price(),
            supply.supply(),
        ))
    }
}
