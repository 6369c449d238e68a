//! Access gate decisions.
//!
//! The gate itself is a component (`RequireAuth`), but the decision it makes
//! lives here so it can run without a renderer.

use crate::backend::auth::{SessionCheck, authentication_status};
use crate::frontend::app::Route;
use dioxus_router::Navigator;
use log::debug;
use serde::{Deserialize, Serialize};

/// Path unauthenticated visitors are sent to.
pub const LOGIN_PATH: &str = "/login";

/// Where the visitor currently is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<serde_json::Value>,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            state: None,
        }
    }

    pub fn from_route(route: &Route) -> Self {
        Self::new(route.to_string())
    }

    /// Encodes the location as a login query string.
    pub fn to_query(&self) -> String {
        let mut query = format!("from={}", urlencoding::encode(&self.path));
        if let Some(state) = &self.state {
            query.push_str("&state=");
            query.push_str(&urlencoding::encode(&state.to_string()));
        }
        query
    }

    /// Decodes a login query string. Anything missing or unreadable falls back to `/`.
    ///
    /// A query that is still percent-encoded as a whole (see
    /// [`Route::login_for`]) is unwrapped first.
    pub fn from_query(query: &str) -> Self {
        let mut location = Self::new("/");

        let query = query.trim_start_matches('?');
        let query = match urlencoding::decode(query) {
            Ok(decoded) if !query.contains('=') => decoded,
            _ => query.into(),
        };

        for pair in query.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            let Ok(value) = urlencoding::decode(value) else {
                continue;
            };
            match key {
                "from" if value.starts_with('/') => location.path = value.into_owned(),
                "state" => location.state = serde_json::from_str(&value).ok(),
                _ => {}
            }
        }

        location
    }
}

/// Auxiliary payload carried by a redirect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectState {
    pub from: Location,
}

/// Navigation directive issued instead of rendering protected content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: String,
    pub state: RedirectState,
    pub replace: bool,
}

impl Redirect {
    pub fn to_login(from: Location) -> Self {
        Self {
            to: LOGIN_PATH.to_string(),
            state: RedirectState { from },
            replace: true,
        }
    }

    /// Route the redirect resolves to, with the origin encoded in its query.
    pub fn route(&self) -> Route {
        Route::login_for(&self.state.from)
    }

    pub fn apply(&self, nav: &impl Navigate) {
        let route = self.route();
        debug!("Redirecting {} -> {route}", self.state.from.path);
        if self.replace {
            nav.replace(route);
        } else {
            nav.push(route);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Render,
    Redirect(Redirect),
}

/// Decides whether the visitor at `location` may see protected content.
pub fn evaluate(check: &dyn SessionCheck, location: &Location) -> GateDecision {
    if authentication_status(check).is_authenticated() {
        GateDecision::Render
    } else {
        GateDecision::Redirect(Redirect::to_login(location.clone()))
    }
}

/// History operations the gate needs.
pub trait Navigate {
    fn push(&self, route: Route);
    fn replace(&self, route: Route);
}

impl Navigate for Navigator {
    fn push(&self, route: Route) {
        Navigator::push(self, route);
    }

    fn replace(&self, route: Route) {
        Navigator::replace(self, route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::{AlwaysAuthenticated, AuthError};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::cell::RefCell;

    struct Denied;

    impl SessionCheck for Denied {
        fn check_session(&self) -> Result<bool, AuthError> {
            Ok(false)
        }
    }

    struct Broken;

    impl SessionCheck for Broken {
        fn check_session(&self) -> Result<bool, AuthError> {
            Err(AuthError::Unavailable("session service unreachable".into()))
        }
    }

    /// Browser-like history stack.
    struct MemoryHistory {
        entries: RefCell<Vec<String>>,
    }

    impl MemoryHistory {
        fn new(entries: &[&str]) -> Self {
            Self {
                entries: RefCell::new(entries.iter().map(ToString::to_string).collect()),
            }
        }

        fn back(&self) -> Option<String> {
            let mut entries = self.entries.borrow_mut();
            entries.pop();
            entries.last().cloned()
        }
    }

    impl Navigate for MemoryHistory {
        fn push(&self, route: Route) {
            self.entries.borrow_mut().push(route.to_string());
        }

        fn replace(&self, route: Route) {
            let mut entries = self.entries.borrow_mut();
            entries.pop();
            entries.push(route.to_string());
        }
    }

    #[test]
    fn stub_predicate_always_renders() {
        for path in ["/", "/anything", "/login"] {
            assert_eq!(
                evaluate(&AlwaysAuthenticated, &Location::new(path)),
                GateDecision::Render
            );
        }
    }

    #[test]
    fn unauthenticated_redirects_to_login_with_origin() {
        let decision = evaluate(&Denied, &Location::new("/"));

        let expected = Redirect {
            to: "/login".to_string(),
            state: RedirectState {
                from: Location::new("/"),
            },
            replace: true,
        };
        assert_eq!(decision, GateDecision::Redirect(expected));
    }

    #[test]
    fn redirect_serializes_like_a_navigation_directive() {
        let redirect = Redirect::to_login(Location::new("/"));
        assert_eq!(
            serde_json::to_value(&redirect).unwrap(),
            json!({ "to": "/login", "state": { "from": { "path": "/" } }, "replace": true })
        );
    }

    #[test]
    fn failing_predicate_redirects() {
        assert!(matches!(
            evaluate(&Broken, &Location::new("/")),
            GateDecision::Redirect(_)
        ));
    }

    #[test]
    fn redirect_replaces_the_gated_entry() {
        let history = MemoryHistory::new(&["/previous", "/"]);
        let GateDecision::Redirect(redirect) = evaluate(&Denied, &Location::new("/")) else {
            panic!("expected a redirect");
        };

        redirect.apply(&history);

        let entries = history.entries.borrow().clone();
        assert_eq!(entries.len(), 2);
        assert!(entries[1].starts_with(LOGIN_PATH));
        assert!(!entries.contains(&"/".to_string()));
        assert_eq!(history.back().as_deref(), Some("/previous"));
    }

    #[test]
    fn push_redirect_keeps_the_gated_entry() {
        let history = MemoryHistory::new(&["/"]);
        let mut redirect = Redirect::to_login(Location::new("/"));
        redirect.replace = false;

        redirect.apply(&history);

        assert_eq!(history.back().as_deref(), Some("/"));
    }

    #[test]
    fn query_carries_path_and_state() {
        let location = Location {
            path: "/a b".to_string(),
            state: Some(json!({ "tab": 2 })),
        };
        let query = location.to_query();

        assert_eq!(query, "from=%2Fa%20b&state=%7B%22tab%22%3A2%7D");
        assert_eq!(Location::from_query(&query), location);
    }

    #[test]
    fn garbled_query_falls_back_to_root() {
        assert_eq!(Location::from_query(""), Location::new("/"));
        assert_eq!(Location::from_query("junk&from"), Location::new("/"));
        assert_eq!(
            Location::from_query("from=https%3A%2F%2Fevil.example"),
            Location::new("/")
        );

        let location = Location::from_query("?from=%2F&state=%7Bnope");
        assert_eq!(location, Location::new("/"));
    }

    #[test]
    fn wrapped_query_is_unwrapped() {
        let location = Location {
            path: "/".to_string(),
            state: Some(json!({ "a": "x&y=z" })),
        };
        let wrapped = urlencoding::encode(&location.to_query()).into_owned();

        assert!(!wrapped.contains('='));
        assert_eq!(Location::from_query(&wrapped), location);
    }
}
