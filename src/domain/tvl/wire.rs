//! Wire types for DefiLlama `/protocols`.

use serde::{Deserialize, Serialize};

/// Raw protocol entry. The upstream object carries many more fields; only
/// the ones the dashboard shows are kept.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LlamaProtocol {
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub chain: Option<String>,
    #[serde(default)]
    pub tvl: Option<f64>,
    #[serde(default)]
    pub change_1d: Option<f64>,
}
