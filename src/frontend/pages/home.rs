//! Home page.

use crate::backend::utils::AuthMode;
use crate::frontend::services::context::AuthState;
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthState>();
    let greeting = match auth.username() {
        Some(name) => format!("Welcome back, {name}!"),
        None => "Welcome!".to_string(),
    };

    rsx! {
        main {
            class: "home",
            h1 { "{greeting}" }
            if auth.mode == AuthMode::Session {
                button {
                    class: "logout-button",
                    onclick: move |_| {
                        let mut auth = auth;
                        spawn(async move {
                            auth.logout().await;
                        });
                    },
                    "Sign out"
                }
            }
        }
    }
}
