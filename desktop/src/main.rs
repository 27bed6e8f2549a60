#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use std::path::PathBuf;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::logger::tracing::{info, Level};
use dioxus::prelude::*;

use ui::core::config::{DashboardConfig, SourceLocation, DEFAULT_SNAPSHOT};
use ui::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
)); // Embedded shared theme; no separate desktop /assets needed.

#[cfg(feature = "desktop")]
fn main() {
    let _ = dioxus::logger::init(Level::INFO);

    let resource_dir = resolve_resource_dir();
    info!(resources = %resource_dir.display(), "starting desktop dashboard");

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(format!("Oddsboard – v{}", env!("CARGO_PKG_VERSION"))),
                )
                .with_resource_directory(resource_dir),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    let _ = dioxus::logger::init(Level::INFO);
    info!("starting dashboard server");
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    use_context_provider(dashboard_config);

    rsx! {
        // Always inline embedded CSS (no external file dependency for desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

/// The snapshot ships next to the app resources.
#[cfg(feature = "desktop")]
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::with_source(SourceLocation::File(
        resolve_resource_dir().join(DEFAULT_SNAPSHOT),
    ))
}

#[cfg(not(feature = "desktop"))]
fn dashboard_config() -> DashboardConfig {
    DashboardConfig::default()
}

#[cfg(feature = "desktop")]
fn resolve_resource_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // During `cargo run` / `dx serve` load directly from the crate.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
            .unwrap_or_else(|| PathBuf::from("assets"))
    }
}
