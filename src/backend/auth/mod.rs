//! Authentication predicates backing the access gate.
//!
//! A predicate answers one question at render time: is the current session
//! valid? Any error while answering it counts as "not authenticated".

pub mod session;
pub mod stub;

pub use session::{Session, SessionError, SessionStore};
pub use stub::AlwaysAuthenticated;

use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("session rejected: {0}")]
    Session(#[from] SessionError),
    #[error("session state unavailable: {0}")]
    Unavailable(String),
}

/// Outcome of a single predicate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Authenticated,
    Unauthenticated,
}

impl AuthStatus {
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Pluggable "check session validity" capability.
pub trait SessionCheck {
    fn check_session(&self) -> Result<bool, AuthError>;
}

/// Runs the predicate, failing closed on error.
pub fn authentication_status(check: &dyn SessionCheck) -> AuthStatus {
    match check.check_session() {
        Ok(true) => AuthStatus::Authenticated,
        Ok(false) => AuthStatus::Unauthenticated,
        Err(e) => {
            warn!("Authentication check failed, denying access: {e}");
            AuthStatus::Unauthenticated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Result<bool, &'static str>);

    impl SessionCheck for Fixed {
        fn check_session(&self) -> Result<bool, AuthError> {
            self.0.map_err(|e| AuthError::Unavailable(e.to_string()))
        }
    }

    #[test]
    fn maps_predicate_answers() {
        assert_eq!(
            authentication_status(&Fixed(Ok(true))),
            AuthStatus::Authenticated
        );
        assert_eq!(
            authentication_status(&Fixed(Ok(false))),
            AuthStatus::Unauthenticated
        );
    }

    #[test]
    fn errors_fail_closed() {
        let status = authentication_status(&Fixed(Err("token store unavailable")));
        assert_eq!(status, AuthStatus::Unauthenticated);
        assert!(!status.is_authenticated());
    }

    #[test]
    fn stub_always_authenticates() {
        for _ in 0..3 {
            assert!(authentication_status(&AlwaysAuthenticated).is_authenticated());
        }
    }
}
