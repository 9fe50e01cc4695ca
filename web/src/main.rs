use std::rc::Rc;

use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::SiteConfig;
use ui::core::fetch::HttpFetcher;
use ui::core::platform;
use ui::core::services::SiteServices;
use ui::views::{Home, Metrics};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/metrics")]
    Metrics {},
}

/// Used when the page URL can't be read (server prerender).
const FALLBACK_BASE_URL: &str = "http://localhost:8080/";

fn nav_home(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Home {},
        "{label}"
    })
}
fn nav_metrics(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Metrics {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

fn site_services() -> SiteServices {
    let base = platform::document_base_url().unwrap_or_else(|| FALLBACK_BASE_URL.to_string());
    let fetcher = HttpFetcher::new(&base)
        .or_else(|err| {
            tracing::warn!("{err}; resolving site paths against {FALLBACK_BASE_URL}");
            HttpFetcher::new(FALLBACK_BASE_URL)
        })
        .expect("fallback base url must parse");
    SiteServices::new(
        Rc::new(fetcher),
        platform::browser_render_capabilities(),
        SiteConfig::load(),
    )
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        home: nav_home,
        metrics: nav_metrics,
    });

    let lang_code = use_signal(|| "en-US".to_string());
    use_context_provider(|| lang_code);
    use_context_provider(site_services);

    rsx! {
        document::Style { "{ui::THEME_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar { }
        Outlet::<Route> {}
    }
}
