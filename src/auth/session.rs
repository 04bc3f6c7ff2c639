//! Session state: login, sign-up, logout, profile edits, startup restore.

use std::time::Duration;

use tokio::sync::watch;

use crate::auth::{Credentials, ProfileUpdate, SignupForm, UserProfile, MIN_PASSWORD_LEN};
use crate::error::{AuthError, SessionError, ValidationError};
use crate::storage::{KeyValueStore, SessionRepository};

/// Artificial latency applied before `login`/`signup` resolve.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub login_latency: Duration,
    pub signup_latency: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            login_latency: Duration::from_millis(1000),
            signup_latency: Duration::from_millis(1500),
        }
    }
}

impl SessionConfig {
    /// No artificial latency.
    pub fn instant() -> Self {
        Self {
            login_latency: Duration::ZERO,
            signup_latency: Duration::ZERO,
        }
    }
}

/// Read-only view of the session handed to consumers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionSnapshot {
    pub is_authenticated: bool,
    pub profile: Option<UserProfile>,
}

/// In-memory session backed by a [`SessionRepository`].
///
/// Every mutation is persisted first and then published to subscribers.
pub struct Session<S> {
    repo: SessionRepository<S>,
    config: SessionConfig,
    current: SessionSnapshot,
    tx: watch::Sender<SessionSnapshot>,
}

impl<S: KeyValueStore> Session<S> {
    pub fn new(store: S, config: SessionConfig) -> Self {
        let (tx, _rx) = watch::channel(SessionSnapshot::default());
        Self {
            repo: SessionRepository::new(store),
            config,
            current: SessionSnapshot::default(),
            tx,
        }
    }

    /// Startup hydration. Marks the session authenticated and returns the
    /// profile when a persisted one exists; storage errors read as no session.
    pub fn restore_session(&mut self) -> Option<UserProfile> {
        let profile = match self.repo.load() {
            Ok(profile) => profile,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted session");
                None
            }
        };

        match profile {
            Some(profile) => {
                tracing::info!(email = %profile.email, "Restored session");
                self.set_authenticated(profile.clone());
                Some(profile)
            }
            None => {
                self.set_signed_out();
                None
            }
        }
    }

    /// Log in with the demo credentials.
    ///
    /// Resolves after the configured login latency. Any pair other than the
    /// demo one fails with [`AuthError::InvalidCredentials`] and leaves the
    /// session untouched.
    pub async fn login(&mut self, credentials: &Credentials) -> Result<UserProfile, SessionError> {
        simulate_latency(self.config.login_latency).await;

        if !credentials.is_demo() {
            tracing::debug!(email = %credentials.email, "Rejected login");
            return Err(AuthError::InvalidCredentials.into());
        }

        let profile = UserProfile::demo(&credentials.email);
        self.repo.save(&profile)?;
        tracing::info!(email = %profile.email, "Logged in");
        self.set_authenticated(profile.clone());
        Ok(profile)
    }

    /// Create an account from the sign-up form.
    ///
    /// Password checks run before the artificial latency; nothing else is
    /// validated.
    pub async fn signup(&mut self, form: &SignupForm) -> Result<UserProfile, SessionError> {
        validate_signup(form)?;
        simulate_latency(self.config.signup_latency).await;

        let profile = UserProfile::from_signup(form);
        self.repo.save(&profile)?;
        tracing::info!(email = %profile.email, "Signed up");
        self.set_authenticated(profile.clone());
        Ok(profile)
    }

    /// Drop the session in memory and in storage. Always succeeds; storage
    /// failures are logged.
    pub fn logout(&mut self) {
        if let Err(e) = self.repo.clear() {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
        tracing::info!("Logged out");
        self.set_signed_out();
    }

    /// Merge `update` into the current profile and persist it.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<UserProfile, SessionError> {
        let mut profile = match &self.current.profile {
            Some(profile) if self.current.is_authenticated => profile.clone(),
            _ => return Err(AuthError::NotAuthenticated.into()),
        };
        profile.apply(update);
        self.repo.save(&profile)?;
        self.set_authenticated(profile.clone());
        Ok(profile)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_authenticated
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.current.profile.as_ref()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.current.clone()
    }

    /// Change notifications. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.tx.subscribe()
    }

    fn set_authenticated(&mut self, profile: UserProfile) {
        self.current = SessionSnapshot {
            is_authenticated: true,
            profile: Some(profile),
        };
        self.tx.send_replace(self.current.clone());
    }

    fn set_signed_out(&mut self) {
        self.current = SessionSnapshot::default();
        self.tx.send_replace(self.current.clone());
    }
}

/// Mismatch is reported before length.
pub fn validate_signup(form: &SignupForm) -> Result<(), ValidationError> {
    if form.password != form.confirm_password {
        return Err(ValidationError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }
    Ok(())
}

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}
