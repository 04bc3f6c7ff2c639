//! # Protocol Monitor
//!
//! Client-side data layer for the Protocol Monitor dashboard: live upstream
//! polling, a simulated price chart, simulated protocol alerts and a demo
//! session.
//!
//! ## Architecture
//!
//! The crate is organized in layers:
//!
//! 1. **Core**: Shared types, domain models and state containers
//! 2. **Storage**: Key-value persistence for the session and settings
//! 3. **Auth**: Demo login, sign-up, profile edits, session restore
//! 4. **HTTP**: `MonitorHttp` with one method per upstream endpoint
//! 5. **High-Level Client**: `MonitorClient` with nested sub-clients
//! 6. **Live**: Background tasks that poll, tick and publish snapshots
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use protocol_monitor::prelude::*;
//!
//! let client = MonitorClient::builder()
//!     .etherscan_api_key("...")
//!     .build()?;
//!
//! let feed = DashboardFeed::start(client, PollConfig::default());
//! let mut market = feed.subscribe_market();
//! market.changed().await?;
//! println!("{:?}", market.borrow().value);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, formatting and randomness helpers.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Error types.
pub mod error;

/// Upstream URL and cadence constants.
pub mod network;

/// User preferences.
pub mod settings;

// ── Layer 2: Storage ─────────────────────────────────────────────────────────

/// Key-value stores and typed repositories.
pub mod storage;

// ── Layer 3: Auth ────────────────────────────────────────────────────────────

/// Demo authentication and the session state machine.
pub mod auth;

// ── Layer 4: HTTP ────────────────────────────────────────────────────────────

/// Low-level upstream HTTP client.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 5: High-Level Client ───────────────────────────────────────────────

/// `MonitorClient`: the entry point for upstream data.
#[cfg(feature = "http")]
pub mod client;

// ── Layer 6: Live ────────────────────────────────────────────────────────────

/// Pollers and simulators running as background tasks.
pub mod live;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared
    pub use crate::shared::{CoinId, ResourceKind};

    // Domain types
    pub use crate::domain::chart::{ChartSample, ChartSeries};
    pub use crate::domain::market::{MarketData, MarketQuote};
    pub use crate::domain::network::NetworkStats;
    pub use crate::domain::notification::{Notification, NotificationCenter, NotificationKind};
    pub use crate::domain::tvl::ProtocolTvl;

    // Errors
    pub use crate::error::{
        AuthError, FetchError, MonitorError, SessionError, StorageError, ValidationError,
    };

    // Settings
    pub use crate::settings::{Currency, Settings, Theme};

    // Storage
    pub use crate::storage::{
        FileStore, KeyValueStore, MemoryStore, SessionRepository, SettingsRepository,
    };

    // Auth + session
    pub use crate::auth::{
        Credentials, ProfileUpdate, Session, SessionConfig, SessionSnapshot, SignupForm,
        TradingLevel, UserProfile,
    };

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        MarketsClient, MonitorClient, MonitorClientBuilder, NetworkClient, TvlClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::{Endpoints, MonitorHttp};

    // Live components
    #[cfg(feature = "http")]
    pub use crate::live::{DashboardFeed, PollConfig};
    pub use crate::live::{
        ChartConfig, ChartFeed, NotificationConfig, NotificationFeed, NotificationsSnapshot,
        Refreshable, ResourcePoller,
    };
}
