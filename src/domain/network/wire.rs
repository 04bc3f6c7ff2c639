//! Wire types for the Etherscan gas oracle and supply endpoints.

use crate::shared::serde_util::lenient_f64;
use serde::{Deserialize, Serialize};

/// Etherscan response envelope. `result` is an object on success and a
/// plain error string otherwise, so it stays untyped here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EtherscanEnvelope {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub result: serde_json::Value,
}

/// `module=gastracker&action=gasoracle` result body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GasOracle {
    #[serde(rename = "SafeGasPrice", default, with = "lenient_f64")]
    pub safe_gas_price: Option<f64>,
    #[serde(rename = "ProposeGasPrice", default, with = "lenient_f64")]
    pub propose_gas_price: Option<f64>,
    #[serde(rename = "FastGasPrice", default, with = "lenient_f64")]
    pub fast_gas_price: Option<f64>,
}

impl EtherscanEnvelope {
    /// The proposed gas price, if the result is a gas oracle object.
    pub fn proposed_gas_price(&self) -> Option<f64> {
        serde_json::from_value::<GasOracle>(self.result.clone())
            .ok()
            .and_then(|g| g.propose_gas_price)
    }

    /// The supply figure, if the result is a numeric string.
    pub fn supply(&self) -> Option<String> {
        match &self.result {
            serde_json::Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                Some(s.clone())
            }
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gas_oracle_result() {
        let json = r#"{"status":"1","message":"OK","result":{"LastBlock":"1","SafeGasPrice":"20","ProposeGasPrice":"22","FastGasPrice":"30"}}"#;
        let env: EtherscanEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.proposed_gas_price(), Some(22.0));
        assert_eq!(env.supply(), None);
    }

    #[test]
    fn test_error_result_is_not_a_value() {
        let json = r#"{"status":"0","message":"NOTOK","result":"Invalid API Key"}"#;
        let env: EtherscanEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.proposed_gas_price(), None);
        assert_eq!(env.supply(), None);
    }

    #[test]
    fn test_gas_oracle_serde_roundtrip() {
        let oracle: GasOracle = serde_json::from_str(
            r#"{"SafeGasPrice":"20","ProposeGasPrice":22.5,"FastGasPrice":"fast"}"#,
        )
        .unwrap();
        assert_eq!(oracle.propose_gas_price, Some(22.5));
        assert_eq!(oracle.fast_gas_price, None);

        let json = serde_json::to_string(&oracle).unwrap();
        assert!(json.contains(r#""SafeGasPrice":20.0"#));
        assert_eq!(serde_json::from_str::<GasOracle>(&json).unwrap(), oracle);
    }

    #[test]
    fn test_supply_result() {
        let json = r#"{"status":"1","message":"OK","result":"120450000000000000000000000"}"#;
        let env: EtherscanEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(env.supply().as_deref(), Some("120450000000000000000000000"));
    }
}
