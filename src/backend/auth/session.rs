//! Stored sign-in session.

use super::{AuthError, SessionCheck};
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("username must be 3-16 characters of letters, numbers and underscores")]
    InvalidUsername,
    #[error("session expires before it was issued")]
    InvertedLifetime,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Starts a session for `username` lasting `ttl_hours` from `now`.
    pub fn issue(
        username: &str,
        ttl_hours: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, SessionError> {
        let username = username.trim();
        if !Self::is_valid_username(username) {
            return Err(SessionError::InvalidUsername);
        }

        Ok(Self {
            username: username.to_string(),
            issued_at: now,
            expires_at: now + Duration::hours(i64::from(ttl_hours)),
        })
    }

    /// Validates if a username meets the requirements.
    pub fn is_valid_username(username: &str) -> bool {
        (3..=16).contains(&username.len())
            && username
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    /// Whether the session is usable at `now`.
    ///
    /// An expired session is simply not valid; a session whose fields are
    /// inconsistent is an error.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> Result<bool, SessionError> {
        if !Self::is_valid_username(&self.username) {
            return Err(SessionError::InvalidUsername);
        }
        if self.expires_at < self.issued_at {
            return Err(SessionError::InvertedLifetime);
        }
        Ok(now < self.expires_at)
    }
}

impl SessionCheck for Option<Session> {
    fn check_session(&self) -> Result<bool, AuthError> {
        match self {
            Some(session) => Ok(session.is_valid_at(Utc::now())?),
            None => Ok(false),
        }
    }
}

/// Session persisted as JSON on disk.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the stored session, `None` when nothing is stored.
    pub async fn try_load(&self) -> Result<Option<Session>, SessionError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path).await?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    /// Like [`Self::try_load`], but an unreadable file counts as no session.
    pub async fn load(&self) -> Option<Session> {
        match self.try_load().await {
            Ok(session) => session,
            Err(e) => {
                warn!("Ignoring unreadable session at {}: {e}", self.path.display());
                None
            }
        }
    }

    pub async fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, json).await?;
        debug!("Saved session for {}", session.username);

        Ok(())
    }

    pub async fn clear(&self) -> Result<(), SessionError> {
        if self.path.exists() {
            fs::remove_file(&self.path).await?;
        }
        Ok(())
    }
}
