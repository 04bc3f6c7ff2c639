//! Market domain: spot quotes for the tracked coin set.

#[cfg(feature = "http")]
pub mod client;
mod convert;
pub mod wire;

use crate::shared::CoinId;
use serde::{Deserialize, Serialize};

/// USD quote for one coin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketQuote {
    pub coin: CoinId,
    pub price_usd: f64,
    pub market_cap_usd: Option<f64>,
    pub volume_24h_usd: Option<f64>,
    /// 24h change in percent.
    pub change_24h_pct: Option<f64>,
}

impl MarketQuote {
    /// Absolute 24h price change in USD, derived from the percent change.
    /// `None` when the percent change is missing or is exactly -100.
    pub fn change_24h_usd(&self) -> Option<f64> {
        let pct = self.change_24h_pct?;
        let ratio = 1.0 + pct / 100.0;
        if ratio == 0.0 {
            return None;
        }
        Some(self.price_usd - self.price_usd / ratio)
    }

    pub fn is_up(&self) -> bool {
        self.change_24h_pct.is_some_and(|pct| pct >= 0.0)
    }
}

/// Quotes for the requested coins, in request order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub quotes: Vec<MarketQuote>,
}

impl MarketData {
    pub fn get(&self, coin: &CoinId) -> Option<&MarketQuote> {
        self.quotes.iter().find(|q| &q.coin == coin)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quote(price: f64, pct: Option<f64>) -> MarketQuote {
        MarketQuote {
            coin: CoinId::from("ethereum"),
            price_usd: price,
            market_cap_usd: None,
            volume_24h_usd: None,
            change_24h_pct: pct,
        }
    }

    #[test]
    fn test_change_24h_usd() {
        let q = quote(110.0, Some(10.0));
        let change = q.change_24h_usd().unwrap();
        assert!((change - 10.0).abs() < 1e-9);
        assert!(q.is_up());
    }

    #[test]
    fn test_change_missing() {
        let q = quote(110.0, None);
        assert_eq!(q.change_24h_usd(), None);
        assert!(!q.is_up());
    }

    #[test]
    fn test_change_undefined_at_total_loss() {
        let q = quote(0.0, Some(-100.0));
        assert_eq!(q.change_24h_usd(), None);
    }
}
