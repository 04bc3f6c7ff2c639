//! Markets sub-client: spot quotes.

use crate::client::MonitorClient;
use crate::domain::market::MarketData;
use crate::error::FetchError;
use crate::shared::CoinId;

/// Sub-client for market data.
pub struct Markets<'a> {
    pub(crate) client: &'a MonitorClient,
}

impl<'a> Markets<'a> {
    /// Quotes for the configured coin set.
    ///
    /// Unlike the network and TVL sub-clients there is no fallback here: a
    /// failed request is returned to the caller.
    pub async fn prices(&self) -> Result<MarketData, FetchError> {
        self.prices_for(&self.client.coins).await
    }

    /// Quotes for an explicit coin list.
    pub async fn prices_for(&self, coins: &[CoinId]) -> Result<MarketData, FetchError> {
        match self.client.http.get_simple_price(coins).await {
            Ok(response) => Ok(MarketData::from_wire(coins, response)),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching market data");
                Err(e)
            }
        }
    }
}
