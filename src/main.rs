mod backend;
mod frontend;

use crate::backend::auth::SessionStore;
use crate::backend::utils::AppConfig;
use crate::backend::utils::paths::{get_config_path, get_session_path};
use crate::frontend::app::Route;
use crate::frontend::services::context::{AuthState, Boot};
use dioxus::LaunchBuilder;
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};
use dioxus_router::Router;
use env_logger::Env;
use log::{info, warn};

fn main() -> anyhow::Result<()> {
    // Logging setup
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut config = match AppConfig::load_or_create(&get_config_path()?) {
        Ok(config) => config,
        Err(e) => {
            warn!("Falling back to default config: {e}");
            AppConfig::default()
        }
    };
    config.apply_env();

    // Session is read once before the first render
    let store = SessionStore::new(get_session_path()?);
    let session = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(store.load());

    info!(
        "Starting with auth mode {:?}, stored session: {}",
        config.auth.mode,
        session.is_some()
    );

    let boot = Boot {
        mode: config.auth.mode,
        session_ttl_hours: config.auth.session_ttl_hours,
        session,
        store,
    };

    let size = LogicalSize::new(
        f64::from(config.window.width),
        f64::from(config.window.height),
    );

    let desktop = Config::default()
        .with_window(
            WindowBuilder::new()
                .with_title(config.window.title.as_str())
                .with_inner_size(size)
                .with_min_inner_size(size)
                .with_resizable(false),
        )
        .with_menu(None);

    LaunchBuilder::new()
        .with_cfg(desktop)
        .with_context(boot)
        .launch(AppRoot);

    Ok(())
}

#[component]
fn AppRoot() -> Element {
    let boot = use_context::<Boot>();
    use_context_provider(|| AuthState::new(&boot));
    rsx! { Router::<Route> {} }
}
