//! Authentication context and state management.

use crate::backend::auth::{
    AlwaysAuthenticated, AuthError, AuthStatus, Session, SessionCheck, SessionError,
    SessionStore, authentication_status,
};
use crate::backend::utils::AuthMode;
use chrono::Utc;
use dioxus::prelude::*;
use log::{info, warn};

/// Startup data handed to the root component through the launch context.
#[derive(Debug, Clone)]
pub struct Boot {
    pub mode: AuthMode,
    pub session_ttl_hours: u32,
    pub session: Option<Session>,
    pub store: SessionStore,
}

#[derive(Clone, Copy)]
pub struct AuthState {
    pub mode: AuthMode,
    pub session_ttl_hours: u32,
    pub current_session: Signal<Option<Session>>,
    store: Signal<SessionStore>,
}

impl AuthState {
    /// Must be called from within a component scope.
    pub fn new(boot: &Boot) -> Self {
        Self {
            mode: boot.mode,
            session_ttl_hours: boot.session_ttl_hours,
            current_session: Signal::new(boot.session.clone()),
            store: Signal::new(boot.store.clone()),
        }
    }

    pub fn status(&self) -> AuthStatus {
        authentication_status(self)
    }

    /// Starts a session for `username` and persists it.
    pub async fn login(&mut self, username: String) -> Result<(), SessionError> {
        let session = Session::issue(&username, self.session_ttl_hours, Utc::now())?;
        let store = self.store.peek().clone();
        store.save(&session).await?;

        info!("Signed in as {}", session.username);
        self.current_session.set(Some(session));
        Ok(())
    }

    /// Logs out the current user.
    pub async fn logout(&mut self) {
        self.current_session.set(None);
        let store = self.store.peek().clone();
        if let Err(e) = store.clear().await {
            warn!("Failed to remove stored session: {e}");
        }
    }

    pub fn username(&self) -> Option<String> {
        self.current_session
            .read()
            .as_ref()
            .map(|session| session.username.clone())
    }
}

impl SessionCheck for AuthState {
    fn check_session(&self) -> Result<bool, AuthError> {
        match self.mode {
            AuthMode::Disabled => AlwaysAuthenticated.check_session(),
            AuthMode::Session => self
                .current_session
                .try_read()
                .map_err(|e| AuthError::Unavailable(e.to_string()))?
                .check_session(),
        }
    }
}
