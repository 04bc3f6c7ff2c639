//! Authentication: demo credential check, sign-up, user profile, session state.
//!
//! ## Security Model
//!
//! There is none. Login compares against a single hardcoded demo pair and
//! sign-up accepts any form that passes the password checks. The session is
//! a persisted flag plus a profile record; see [`session::Session`].
//!
//! ## Session Hydration
//!
//! Call [`session::Session::restore_session`] once at startup to pick up a
//! profile persisted by an earlier run.

pub mod session;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

pub use session::{Session, SessionConfig, SessionSnapshot};

/// The only accepted login email.
pub const DEMO_EMAIL: &str = "demo@example.com";

/// The only accepted login password.
pub const DEMO_PASSWORD: &str = "demo123";

/// Shortest password accepted at sign-up.
pub const MIN_PASSWORD_LEN: usize = 6;

const DEFAULT_RISK_SCORE: u8 = 50;

// ============================================================================
// User profile types
// ============================================================================

/// Experience tier shown on the profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TradingLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl TradingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }
}

impl std::fmt::Display for TradingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Profile of the signed-in user, persisted under `userProfile`.
///
/// Unknown fields are rejected when loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub join_date: NaiveDate,
    pub bio: String,
    pub trading_level: TradingLevel,
    pub total_trades: u32,
    /// Percent of profitable trades.
    pub success_rate: f64,
    #[serde(rename = "totalPnL")]
    pub total_pnl: f64,
    /// 0–100.
    pub risk_score: u8,
}

impl UserProfile {
    /// Fresh profile with zeroed trading stats, joined today.
    fn new_member(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        location: impl Into<String>,
        bio: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            location: location.into(),
            join_date: Utc::now().date_naive(),
            bio: bio.into(),
            trading_level: TradingLevel::Beginner,
            total_trades: 0,
            success_rate: 0.0,
            total_pnl: 0.0,
            risk_score: DEFAULT_RISK_SCORE,
        }
    }

    /// Profile created by a successful demo login.
    pub fn demo(email: &str) -> Self {
        Self::new_member(
            "Demo User",
            email,
            "+1 (555) 123-4567",
            "San Francisco, CA",
            "New Protocol Monitor user exploring DeFi opportunities.",
        )
    }

    /// Profile created by a successful sign-up.
    pub fn from_signup(form: &SignupForm) -> Self {
        Self::new_member(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.location.clone(),
            format!(
                "New Protocol Monitor user from {}. Excited to explore DeFi opportunities!",
                form.location
            ),
        )
    }

    /// Overwrite every field present in `update`.
    pub fn apply(&mut self, update: ProfileUpdate) {
        let ProfileUpdate {
            name,
            email,
            phone,
            location,
            bio,
            trading_level,
            total_trades,
            success_rate,
            total_pnl,
            risk_score,
        } = update;

        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = phone {
            self.phone = v;
        }
        if let Some(v) = location {
            self.location = v;
        }
        if let Some(v) = bio {
            self.bio = v;
        }
        if let Some(v) = trading_level {
            self.trading_level = v;
        }
        if let Some(v) = total_trades {
            self.total_trades = v;
        }
        if let Some(v) = success_rate {
            self.success_rate = v;
        }
        if let Some(v) = total_pnl {
            self.total_pnl = v;
        }
        if let Some(v) = risk_score {
            self.risk_score = v.min(100);
        }
    }
}

// ============================================================================
// Request types
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub(crate) fn is_demo(&self) -> bool {
        self.email == DEMO_EMAIL && self.password == DEMO_PASSWORD
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub location: String,
}

/// Partial profile edit. The join date is not editable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub trading_level: Option<TradingLevel>,
    pub total_trades: Option<u32>,
    pub success_rate: Option<f64>,
    #[serde(rename = "totalPnL")]
    pub total_pnl: Option<f64>,
    pub risk_score: Option<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_profile_defaults() {
        let p = UserProfile::demo(DEMO_EMAIL);
        assert_eq!(p.name, "Demo User");
        assert_eq!(p.trading_level, TradingLevel::Beginner);
        assert_eq!(p.total_trades, 0);
        assert_eq!(p.risk_score, 50);
        assert_eq!(p.join_date, Utc::now().date_naive());
    }

    #[test]
    fn test_signup_profile_bio_mentions_location() {
        let form = SignupForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            phone: "123".into(),
            location: "Lisbon".into(),
        };
        let p = UserProfile::from_signup(&form);
        assert_eq!(p.name, "Ada");
        assert!(p.bio.contains("from Lisbon."));
    }

    #[test]
    fn test_profile_wire_layout() {
        let json = serde_json::to_value(UserProfile::demo(DEMO_EMAIL)).unwrap();
        assert_eq!(json["tradingLevel"], "Beginner");
        assert_eq!(json["totalTrades"], 0);
        assert_eq!(json["totalPnL"], 0.0);
        assert!(json["joinDate"].as_str().unwrap().len() == 10);
    }

    #[test]
    fn test_profile_rejects_unknown_fields() {
        let mut json = serde_json::to_value(UserProfile::demo(DEMO_EMAIL)).unwrap();
        json["avatar"] = serde_json::Value::String(String::new());
        assert!(serde_json::from_value::<UserProfile>(json).is_err());
    }

    #[test]
    fn test_apply_merges_present_fields_only() {
        let mut p = UserProfile::demo(DEMO_EMAIL);
        p.apply(ProfileUpdate {
            bio: Some("Yield farmer".into()),
            trading_level: Some(TradingLevel::Advanced),
            risk_score: Some(180),
            ..Default::default()
        });
        assert_eq!(p.bio, "Yield farmer");
        assert_eq!(p.trading_level, TradingLevel::Advanced);
        assert_eq!(p.risk_score, 100);
        assert_eq!(p.name, "Demo User");
    }

    #[test]
    fn test_is_demo_exact_match() {
        assert!(Credentials::new(DEMO_EMAIL, DEMO_PASSWORD).is_demo());
        assert!(!Credentials::new("Demo@example.com", DEMO_PASSWORD).is_demo());
        assert!(!Credentials::new(DEMO_EMAIL, "demo123 ").is_demo());
    }
}
