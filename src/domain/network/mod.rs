//! Network domain: Ethereum gas price and supply.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use serde::{Deserialize, Serialize};

/// Gas price (gwei) reported when the gas oracle is unavailable.
pub const FALLBACK_GAS_PRICE: f64 = 25.0;

/// ETH supply string reported when the supply endpoint is unavailable.
pub const FALLBACK_ETH_SUPPLY: &str = "120000000";

const WEI_PER_ETH: f64 = 1e18;

/// Network-level stats shown in the monitoring panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkStats {
    /// Proposed gas price in gwei.
    pub gas_price: f64,
    /// Total ETH supply as the upstream reports it (wei, or the fallback in ETH).
    pub eth_supply: String,
}

impl NetworkStats {
    pub fn fallback() -> Self {
        Self {
            gas_price: FALLBACK_GAS_PRICE,
            eth_supply: FALLBACK_ETH_SUPPLY.to_string(),
        }
    }

    /// Build from the two upstream results, substituting the fallback for
    /// each missing or unparsable piece independently. A zero gas price is
    /// a real reading and is kept.
    pub fn from_parts(gas_price: Option<f64>, eth_supply: Option<String>) -> Self {
        Self {
            gas_price: gas_price.unwrap_or(FALLBACK_GAS_PRICE),
            eth_supply: eth_supply
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| FALLBACK_ETH_SUPPLY.to_string()),
        }
    }

    /// Supply in whole ETH. Values longer than 18 digits are treated as wei.
    pub fn eth_supply_in_eth(&self) -> Option<f64> {
        let raw: f64 = self.eth_supply.parse().ok()?;
        if self.eth_supply.len() > 18 {
            Some(raw / WEI_PER_ETH)
        } else {
            Some(raw)
        }
    }
}

impl Default for NetworkStats {
    fn default() -> Self {
        Self::fallback()
    }
}
