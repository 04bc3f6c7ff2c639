//! TVL sub-client: top protocols, with fallback.

use crate::client::MonitorClient;
use crate::domain::tvl::{top_protocols, ProtocolTvl};
use crate::error::FetchError;
use crate::network::TOP_PROTOCOLS;

/// Sub-client for DeFi TVL.
pub struct Tvl<'a> {
    pub(crate) client: &'a MonitorClient,
}

impl<'a> Tvl<'a> {
    /// Top protocols by TVL. Never fails: an upstream error yields an empty list.
    pub async fn top(&self) -> Vec<ProtocolTvl> {
        match self.try_top().await {
            Ok(list) => list,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching DeFi TVL, using empty list");
                Vec::new()
            }
        }
    }

    pub async fn try_top(&self) -> Result<Vec<ProtocolTvl>, FetchError> {
        let protocols = self.client.http.get_protocols().await?;
        Ok(top_protocols(protocols, TOP_PROTOCOLS))
    }
}
