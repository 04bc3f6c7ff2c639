//! Low-level HTTP client: `MonitorHttp`.
//!
//! One method per upstream endpoint. Returns wire types (conversion to domain
//! types and the fallback policy live in the sub-clients).

use crate::domain::market::wire::SimplePriceResponse;
use crate::domain::network::wire::EtherscanEnvelope;
use crate::domain::tvl::wire::LlamaProtocol;
use crate::error::FetchError;
use crate::network::{
    DEFAULT_COINGECKO_URL, DEFAULT_ETHERSCAN_API_KEY, DEFAULT_ETHERSCAN_URL, DEFAULT_LLAMA_URL,
    REQUEST_TIMEOUT,
};
use crate::shared::CoinId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Upstream endpoints and credentials.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub coingecko_url: String,
    pub etherscan_url: String,
    pub etherscan_api_key: String,
    pub llama_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            coingecko_url: DEFAULT_COINGECKO_URL.to_string(),
            etherscan_url: DEFAULT_ETHERSCAN_URL.to_string(),
            etherscan_api_key: DEFAULT_ETHERSCAN_API_KEY.to_string(),
            llama_url: DEFAULT_LLAMA_URL.to_string(),
        }
    }
}

/// Low-level HTTP client for the three upstream APIs.
#[derive(Debug, Clone)]
pub struct MonitorHttp {
    endpoints: Endpoints,
    client: Client,
}

impl MonitorHttp {
    pub fn new(endpoints: Endpoints) -> Result<Self, FetchError> {
        Self::with_timeout(endpoints, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(endpoints: Endpoints, timeout: Duration) -> Result<Self, FetchError> {
        #[allow(unused_mut)]
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder.timeout(timeout).pool_max_idle_per_host(4);
        }
        #[cfg(target_arch = "wasm32")]
        let _ = timeout;

        Ok(Self {
            endpoints: Endpoints {
                coingecko_url: endpoints.coingecko_url.trim_end_matches('/').to_string(),
                etherscan_url: endpoints.etherscan_url.trim_end_matches('/').to_string(),
                etherscan_api_key: endpoints.etherscan_api_key,
                llama_url: endpoints.llama_url.trim_end_matches('/').to_string(),
            },
            client: builder.build()?,
        })
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    // ── CoinGecko ────────────────────────────────────────────────────────

    pub async fn get_simple_price(&self, coins: &[CoinId]) -> Result<SimplePriceResponse, FetchError> {
        let ids = coins.iter().map(CoinId::as_str).collect::<Vec<_>>().join(",");
        let url = format!(
            "{}/simple/price?ids={}&vs_currencies=usd&include_24hr_change=true&include_24hr_vol=true&include_market_cap=true",
            self.endpoints.coingecko_url,
            urlencoding::encode(&ids)
        );
        self.get(&url).await
    }

    // ── Etherscan ────────────────────────────────────────────────────────

    pub async fn get_gas_oracle(&self) -> Result<EtherscanEnvelope, FetchError> {
        let url = self.etherscan_url("gastracker", "gasoracle");
        self.get(&url).await
    }

    pub async fn get_eth_supply(&self) -> Result<EtherscanEnvelope, FetchError> {
        let url = self.etherscan_url("stats", "ethsupply");
        self.get(&url).await
    }

    fn etherscan_url(&self, module: &str, action: &str) -> String {
        format!(
            "{}?module={}&action={}&apikey={}",
            self.endpoints.etherscan_url,
            module,
            action,
            urlencoding::encode(&self.endpoints.etherscan_api_key)
        )
    }

    // ── DefiLlama ────────────────────────────────────────────────────────

    pub async fn get_protocols(&self) -> Result<Vec<LlamaProtocol>, FetchError> {
        let url = format!("{}/protocols", self.endpoints.llama_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await.map_err(map_reqwest)?;
        let status = resp.status();

        if status.is_success() {
            return resp.json::<T>().await.map_err(|e| {
                if e.is_decode() {
                    FetchError::Decode(e.to_string())
                } else {
                    map_reqwest(e)
                }
            });
        }

        let body = resp.text().await.unwrap_or_default();
        Err(FetchError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn map_reqwest(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_trimmed() {
        let http = MonitorHttp::new(Endpoints {
            coingecko_url: "http://localhost:1/api/v3/".into(),
            etherscan_url: "http://localhost:1/api/".into(),
            etherscan_api_key: "k y".into(),
            llama_url: "http://localhost:1/".into(),
        })
        .unwrap();
        assert_eq!(http.endpoints().coingecko_url, "http://localhost:1/api/v3");
        assert_eq!(
            http.etherscan_url("stats", "ethsupply"),
            "http://localhost:1/api?module=stats&action=ethsupply&apikey=k%20y"
        );
    }

    #[tokio::test]
    async fn test_unreachable_host_is_request_error() {
        let http = MonitorHttp::with_timeout(
            Endpoints {
                llama_url: "http://127.0.0.1:1".into(),
                ..Endpoints::default()
            },
            Duration::from_secs(2),
        )
        .unwrap();
        let err = http.get_protocols().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_) | FetchError::Timeout));
    }
}
