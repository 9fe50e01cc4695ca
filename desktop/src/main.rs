#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

use std::path::PathBuf;
use std::rc::Rc;

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SiteConfig;
use ui::core::fetch::LocalFetcher;
use ui::core::markdown::RenderCapabilities;
use ui::core::services::SiteServices;
use ui::views::{Home, Metrics};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/metrics")]
    Metrics {},
}

#[cfg(feature = "desktop")]
fn main() {
    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Protector – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    LaunchBuilder::server().launch(App);
}

fn nav_home(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Home {}, "{label}" })
}
fn nav_metrics(label: &str) -> Element {
    rsx!(Link { class: "navbar__link", to: Route::Metrics {}, "{label}" })
}

/// Directory the site documents are read from.
fn resolve_site_dir() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        // `cargo run` / `dx serve`: the demo content next to the workspace.
        PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../site"))
    }

    #[cfg(not(debug_assertions))]
    {
        std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join("site")))
            .unwrap_or_else(|| PathBuf::from("site"))
    }
}

fn site_services() -> SiteServices {
    let site_dir = resolve_site_dir();
    tracing::info!("serving site documents from {}", site_dir.display());
    // No markdown engine on desktop; the README is shown as plain text.
    SiteServices::new(
        Rc::new(LocalFetcher::new(site_dir)),
        RenderCapabilities::plain_text(),
        SiteConfig::load(),
    )
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar updates this on language selection.
    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(site_services);

    register_nav(NavBuilder {
        home: nav_home,
        metrics: nav_metrics,
    });

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        // Keyed by language so the routed subtree remounts on change.
        div {
            key: "{lang_code()}",
            Router::<Route> { }
        }
    }
}

/// A desktop-specific Router around the shared `Navbar` component
/// which allows us to use the desktop-specific `Route` enum.
#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        AppNavbar { }

        Outlet::<Route> {}
    }
}
