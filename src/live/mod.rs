//! Live components: background tasks that own dashboard state and publish
//! snapshots through `watch` channels.

pub mod chart;
#[cfg(feature = "http")]
pub mod feed;
pub mod notifications;
pub mod poller;

pub use chart::{ChartConfig, ChartFeed};
#[cfg(feature = "http")]
pub use feed::{DashboardFeed, PollConfig};
pub use notifications::{NotificationConfig, NotificationFeed, NotificationsSnapshot};
pub use poller::{Refreshable, ResourcePoller};
