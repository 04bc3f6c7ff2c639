//! Wire types for the CoinGecko `/simple/price` endpoint.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One coin's entry in the simple price response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SimplePrice {
    #[serde(default)]
    pub usd: Option<f64>,
    #[serde(default)]
    pub usd_market_cap: Option<f64>,
    #[serde(default)]
    pub usd_24h_vol: Option<f64>,
    #[serde(default)]
    pub usd_24h_change: Option<f64>,
}

/// `{ "<coin id>": SimplePrice, ... }`
pub type SimplePriceResponse = HashMap<String, SimplePrice>;
