//! TVL domain: top DeFi protocols by total value locked.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::shared::fmt::num;
use serde::{Deserialize, Serialize};

/// One protocol's TVL entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProtocolTvl {
    pub name: String,
    pub symbol: Option<String>,
    pub category: Option<String>,
    pub chain: Option<String>,
    /// TVL in USD.
    pub tvl: f64,
    /// 1-day change in percent.
    pub change_1d: Option<f64>,
}

impl ProtocolTvl {
    /// TVL in short form, e.g. `$32.1B`.
    pub fn tvl_display(&self) -> String {
        format!("${}", num::compact(self.tvl))
    }
}

impl From<wire::LlamaProtocol> for ProtocolTvl {
    fn from(p: wire::LlamaProtocol) -> Self {
        Self {
            name: p.name,
            symbol: p.symbol.filter(|s| !s.is_empty() && s != "-"),
            category: p.category,
            chain: p.chain,
            tvl: p.tvl.unwrap_or_default(),
            change_1d: p.change_1d,
        }
    }
}

/// Keep the first `limit` protocols in upstream order.
pub fn top_protocols(protocols: Vec<wire::LlamaProtocol>, limit: usize) -> Vec<ProtocolTvl> {
    protocols
        .into_iter()
        .take(limit)
        .map(ProtocolTvl::from)
        .collect()
}

/// Sum of TVL across the given protocols.
pub fn total_tvl(protocols: &[ProtocolTvl]) -> f64 {
    protocols.iter().map(|p| p.tvl).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn llama(name: &str, tvl: f64) -> wire::LlamaProtocol {
        wire::LlamaProtocol {
            name: name.to_string(),
            symbol: Some("-".to_string()),
            category: Some("Dexes".to_string()),
            chain: Some("Multi-Chain".to_string()),
            tvl: Some(tvl),
            change_1d: None,
        }
    }

    #[test]
    fn test_top_protocols_truncates_in_order() {
        let raw = (0..15).map(|i| llama(&format!("p{i}"), i as f64)).collect();
        let top = top_protocols(raw, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].name, "p0");
        assert_eq!(top[9].name, "p9");
        assert_eq!(top[0].symbol, None);
    }

    #[test]
    fn test_total_and_display() {
        let top = top_protocols(vec![llama("a", 1.5e9), llama("b", 0.5e9)], 10);
        assert_eq!(total_tvl(&top), 2.0e9);
        assert_eq!(top[0].tvl_display(), "$1.5B");
    }
}
