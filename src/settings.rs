//! User settings persisted under `protocolMonitorSettings`.
//!
//! Stored as-is: nothing is validated on load, and a missing or unreadable
//! record falls back to [`Settings::default`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub notifications: NotificationSettings,
    pub trading: TradingSettings,
    pub display: DisplaySettings,
    pub api: ApiKeys,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NotificationSettings {
    pub price_alerts: bool,
    pub governance_updates: bool,
    pub risk_alerts: bool,
    pub portfolio_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            price_alerts: true,
            governance_updates: true,
            risk_alerts: true,
            portfolio_updates: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TradingSettings {
    /// 0–100.
    pub risk_tolerance: u8,
    pub auto_rebalance: bool,
    /// Max share of the portfolio in one asset, percent.
    pub max_allocation: u8,
    pub stop_loss_enabled: bool,
}

impl Default for TradingSettings {
    fn default() -> Self {
        Self {
            risk_tolerance: 65,
            auto_rebalance: false,
            max_allocation: 25,
            stop_loss_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplaySettings {
    pub theme: Theme,
    pub currency: Currency,
    /// Seconds.
    pub refresh_interval: u32,
    pub compact_mode: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            currency: Currency::Usd,
            refresh_interval: 30,
            compact_mode: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Btc,
    Eth,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ApiKeys {
    pub etherscan_key: String,
    pub coin_gecko_key: String,
    pub infura_key: String,
}
