use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Route-aware link constructors registered by each launcher, so `ui` never
/// needs the platform's `Route` enum. Each receives the localized label:
/// ```ignore
/// register_nav(NavBuilder {
///     home: |label| rsx!( Link { class: "navbar__link", to: Route::Home {}, "{label}" } ),
///     metrics: |label| rsx!( Link { class: "navbar__link", to: Route::Metrics {}, "{label}" } ),
/// });
/// ```
pub struct NavBuilder {
    pub home: fn(label: &str) -> Element,
    pub metrics: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

/// First registration wins.
pub fn register_nav(builder: NavBuilder) {
    if NAV_BUILDER.set(builder).is_err() {
        tracing::debug!("navigation already registered");
    }
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    i18n::init();

    // Re-render when the launcher's language signal changes.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|code| code()).unwrap_or_default();

    let links = match NAV_BUILDER.get() {
        Some(builder) => {
            let home = (builder.home)(&t!("nav-home"));
            let metrics = (builder.metrics)(&t!("nav-metrics"));
            rsx! {
                {home}
                {metrics}
            }
        }
        None => children,
    };

    rsx! {
        header { id: "navbar", class: "navbar",
            div { style: "display:none", "{lang_marker}" }
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Protector" }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }
                nav { class: "navbar__links", {links} }
                LocaleSwitcher {}
            }
        }
    }
}

/// Language picker; renders nothing while only one locale is embedded.
#[component]
fn LocaleSwitcher() -> Element {
    let langs = use_signal(i18n::available_languages);
    let mut current = use_signal(|| "en-US".to_string());
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();

    if langs.read().len() < 2 {
        return rsx! {};
    }

    let on_change = move |evt: FormEvent| {
        let tag = evt.value();
        match i18n::set_language(&tag) {
            Ok(()) => {
                current.set(tag.clone());
                if let Some(mut code) = lang_code {
                    code.set(tag);
                }
            }
            Err(err) => tracing::warn!("language switch to {tag} failed: {err}"),
        }
    };

    rsx! {
        div { class: "navbar__locale",
            label { class: "visually-hidden", r#for: "locale-select", {t!("nav-language-label")} }
            select {
                id: "locale-select",
                value: "{current}",
                oninput: on_change,
                for code in langs() {
                    option { key: "{code}", value: "{code}", "{code}" }
                }
            }
        }
    }
}
