//! Integration tests for the session lifecycle over a file-backed store.
//!
//! Each test uses its own file under the system temp directory, so they can
//! run in parallel.

use std::path::PathBuf;
use std::sync::Arc;

use protocol_monitor::auth::{
    Credentials, ProfileUpdate, Session, SessionConfig, SignupForm, TradingLevel, DEMO_EMAIL,
    DEMO_PASSWORD,
};
use protocol_monitor::error::{AuthError, SessionError, ValidationError};
use protocol_monitor::settings::{Currency, Settings};
use protocol_monitor::storage::{
    FileStore, KeyValueStore, SettingsRepository, KEY_IS_AUTHENTICATED, KEY_USER_PROFILE,
};

/// Removes the backing file when the test ends.
struct TempStore {
    path: PathBuf,
    store: Arc<FileStore>,
}

impl TempStore {
    fn new() -> Self {
        let path = std::env::temp_dir().join(format!("pm-session-{}.json", uuid::Uuid::new_v4()));
        Self {
            store: Arc::new(FileStore::new(&path)),
            path,
        }
    }

    fn session(&self) -> Session<Arc<FileStore>> {
        Session::new(Arc::clone(&self.store), SessionConfig::instant())
    }
}

impl Drop for TempStore {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.path);
    }
}

fn signup_form(password: &str, confirm: &str) -> SignupForm {
    SignupForm {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        password: password.into(),
        confirm_password: confirm.into(),
        phone: "+1 555 0100".into(),
        location: "Boston, MA".into(),
    }
}

#[tokio::test]
async fn test_login_survives_restart() {
    let tmp = TempStore::new();

    let mut session = tmp.session();
    assert_eq!(session.restore_session(), None);
    let profile = session
        .login(&Credentials::new(DEMO_EMAIL, DEMO_PASSWORD))
        .await
        .unwrap();
    assert_eq!(profile.trading_level, TradingLevel::Beginner);
    assert_eq!(profile.total_trades, 0);
    drop(session);

    let mut reopened = tmp.session();
    let restored = reopened.restore_session().expect("session should restore");
    assert_eq!(restored, profile);
    assert!(reopened.is_authenticated());
}

#[tokio::test]
async fn test_wrong_password_leaves_store_untouched() {
    let tmp = TempStore::new();
    let mut session = tmp.session();

    let err = session
        .login(&Credentials::new(DEMO_EMAIL, "letmein"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Auth(AuthError::InvalidCredentials)));
    assert!(!session.is_authenticated());
    assert_eq!(tmp.store.get(KEY_IS_AUTHENTICATED).unwrap(), None);
}

#[tokio::test]
async fn test_signup_edit_logout() {
    let tmp = TempStore::new();
    let mut session = tmp.session();

    let err = session.signup(&signup_form("abc", "xyz")).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::PasswordMismatch)
    ));
    let err = session.signup(&signup_form("ab", "ab")).await.unwrap_err();
    assert!(matches!(
        err,
        SessionError::Validation(ValidationError::PasswordTooShort { .. })
    ));

    let profile = session
        .signup(&signup_form("correct horse", "correct horse"))
        .await
        .unwrap();
    assert_eq!(profile.email, "ada@example.com");

    session
        .update_profile(ProfileUpdate {
            bio: Some("Liquidity researcher".into()),
            ..Default::default()
        })
        .unwrap();
    let raw = tmp.store.get(KEY_USER_PROFILE).unwrap().unwrap();
    assert!(raw.contains("Liquidity researcher"));
    assert!(raw.contains("\"joinDate\""));

    session.logout();
    assert!(!session.is_authenticated());
    assert_eq!(session.restore_session(), None);
    assert_eq!(tmp.store.get(KEY_USER_PROFILE).unwrap(), None);
}

#[test]
fn test_settings_persist_next_to_session() {
    let tmp = TempStore::new();
    let repo = SettingsRepository::new(Arc::clone(&tmp.store));

    let mut settings = Settings::default();
    settings.display.currency = Currency::Eth;
    settings.trading.max_allocation = 40;
    repo.save(&settings).unwrap();

    let reopened = SettingsRepository::new(Arc::new(FileStore::new(&tmp.path)));
    assert_eq!(reopened.load().unwrap(), settings);
}
