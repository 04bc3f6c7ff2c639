//! Conversion: SimplePriceResponse → MarketData.

use super::wire::{SimplePrice, SimplePriceResponse};
use super::{MarketData, MarketQuote};
use crate::shared::CoinId;

impl MarketQuote {
    /// `None` when the upstream sent no USD price for the coin.
    pub(crate) fn from_wire(coin: CoinId, source: SimplePrice) -> Option<Self> {
        Some(Self {
            coin,
            price_usd: source.usd?,
            market_cap_usd: source.usd_market_cap,
            volume_24h_usd: source.usd_24h_vol,
            change_24h_pct: source.usd_24h_change,
        })
    }
}

impl MarketData {
    /// Builds quotes in the order of `coins`; coins missing from the response
    /// or without a USD price are skipped.
    pub fn from_wire(coins: &[CoinId], mut response: SimplePriceResponse) -> Self {
        let quotes = coins
            .iter()
            .filter_map(|coin| {
                let entry = response.remove(coin.as_str())?;
                MarketQuote::from_wire(coin.clone(), entry)
            })
            .collect();
        Self { quotes }
    }
}
