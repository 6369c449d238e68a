//! Application routing system.

use crate::frontend::components::gate::Guarded;
use crate::frontend::pages::home::Home;
use crate::frontend::pages::login::Login;
use crate::frontend::pages::not_found::NotFound;
use crate::frontend::services::gate::Location;

use dioxus::prelude::*;
use dioxus_router::Routable;

/// Main routing enum for the application.
#[derive(Clone, Routable, Debug, PartialEq, Eq)]
#[rustfmt::skip]
pub enum Route {
    /// Home page, behind the access gate.
    #[layout(Guarded)]
        #[route("/")]
        Home {},
    #[end_layout]
    /// Sign-in page; the query carries the location to return to.
    #[route("/login?:..query")]
    Login { query: String },
    /// Anything else.
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    pub fn home() -> Self {
        Self::Home {}
    }

    /// Login route returning to `from`.
    ///
    /// The router percent-decodes the query once before building `Login`,
    /// so the encoded location is wrapped in one more layer of encoding.
    pub fn login_for(from: &Location) -> Self {
        Self::Login {
            query: urlencoding::encode(&from.to_query()).into_owned(),
        }
    }

    /// Maps a path onto the table. Unknown paths land on `NotFound`.
    pub fn resolve(path: &str) -> Self {
        path.parse().unwrap_or_else(|_| Self::NotFound {
            segments: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(ToString::to_string)
                .collect(),
        })
    }
}
