//! Sign-in page.

use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::gate::Location;
use dioxus::{events::KeyboardEvent, prelude::*};
use dioxus_router::navigator;
use log::warn;

#[component]
pub fn Login(query: String) -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let mut username = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Only the path is restored; the router keeps no per-entry state, so
    // `from.state` ends here.
    let from = Location::from_query(&query);
    let target = Route::resolve(&from.path);

    // Already signed in: go straight back
    let forward = target.clone();
    use_effect(move || {
        if auth.status().is_authenticated() {
            nav.replace(forward.clone());
        }
    });

    let submit = move || {
        let mut auth = auth;
        let target = target.clone();
        let name = username.read().trim().to_string();
        error.set(None);
        spawn(async move {
            let mut error = error;
            match auth.login(name).await {
                Ok(()) => {
                    nav.replace(target);
                }
                Err(e) => {
                    warn!("Sign-in failed: {e}");
                    error.set(Some(e.to_string()));
                }
            }
        });
    };

    let mut on_click = submit.clone();
    let mut on_enter = submit;

    rsx! {
        main {
            class: "login",
            h1 { "Sign in" }
            p { class: "login-target", "You will be returned to {from.path}" }
            input {
                class: "login-input",
                r#type: "text",
                value: "{username()}",
                maxlength: "16",
                placeholder: "Enter nickname...",
                autofocus: true,
                oninput: move |e| {
                    username.set(e.value());
                    error.set(None);
                },
                onkeydown: move |e: KeyboardEvent| {
                    if e.key() == Key::Enter {
                        on_enter();
                    }
                },
            }
            button {
                class: "login-button",
                onclick: move |_| on_click(),
                "Continue"
            }
            if let Some(message) = error() {
                div { class: "error-message", "{message}" }
            }
        }
    }
}
