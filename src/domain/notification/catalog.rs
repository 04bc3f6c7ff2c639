//! Canned alert templates the simulator draws from.

use super::NotificationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationTemplate {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: &'static str,
}

pub static CATALOG: [NotificationTemplate; 4] = [
    NotificationTemplate {
        kind: NotificationKind::Warning,
        title: "Market Volatility Spike",
        message: "ETH volatility increased by 18% following Uniswap V4 proposal announcement",
    },
    NotificationTemplate {
        kind: NotificationKind::Success,
        title: "Governance Update",
        message: "Aave V4 cross-chain parameters successfully implemented",
    },
    NotificationTemplate {
        kind: NotificationKind::Info,
        title: "Gas Price Alert",
        message: "Ethereum gas prices dropped to 18 gwei - optimal for transactions",
    },
    NotificationTemplate {
        kind: NotificationKind::Error,
        title: "Risk Alert",
        message: "MakerDAO RWA proposal risk score elevated to 85% - review positions",
    },
];
