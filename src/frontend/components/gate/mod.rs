//! Access gate components.

use crate::frontend::app::Route;
use crate::frontend::services::context::AuthState;
use crate::frontend::services::gate::{GateDecision, Location, evaluate};
use dioxus::prelude::*;
use dioxus_router::{components::Outlet, navigator, use_route};

/// Renders `children` for signed-in visitors, otherwise replaces the current
/// entry with the login page.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let nav = navigator();
    let auth = use_context::<AuthState>();
    let route = use_route::<Route>();

    let decision = evaluate(&auth, &Location::from_route(&route));
    if let GateDecision::Redirect(redirect) = &decision {
        redirect.apply(&nav);
    }

    gate_view(&decision, children)
}

/// What the gate puts on screen for `decision`. A redirect renders nothing.
fn gate_view(decision: &GateDecision, children: Element) -> Element {
    match decision {
        GateDecision::Render => rsx! { {children} },
        GateDecision::Redirect(_) => rsx! {},
    }
}

/// Layout wrapping every guarded route.
#[component]
pub fn Guarded() -> Element {
    rsx! {
        RequireAuth {
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::services::gate::Redirect;

    const PROTECTED: &str = "protected content";

    fn protected() -> Element {
        let label = PROTECTED.to_string();
        rsx! { p { "{label}" } }
    }

    fn allowed() -> Element {
        gate_view(&GateDecision::Render, protected())
    }

    fn denied() -> Element {
        let redirect = Redirect::to_login(Location::new("/"));
        gate_view(&GateDecision::Redirect(redirect), protected())
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        format!("{:?}", dom.rebuild_to_vec())
    }

    #[test]
    fn allowed_visitor_sees_children() {
        assert!(render(allowed).contains(PROTECTED));
    }

    #[test]
    fn denied_visitor_never_sees_children() {
        assert!(!render(denied).contains(PROTECTED));
    }
}
