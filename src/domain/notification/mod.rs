//! Notification domain: simulated protocol alerts.

pub mod catalog;
pub mod state;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use catalog::{NotificationTemplate, CATALOG};
pub use state::NotificationCenter;

/// Most recent notifications kept; older ones are dropped.
pub const NOTIFICATION_CAPACITY: usize = 20;

/// Chance that one emission check produces an alert.
pub const EMISSION_PROBABILITY: f64 = 0.3;

/// Severity of an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
    Info,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single alert in the notification center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// A fresh unread notification built from a catalog template.
    pub fn from_template(template: &NotificationTemplate, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: template.kind,
            title: template.title.to_string(),
            message: template.message.to_string(),
            created_at,
            read: false,
        }
    }
}
