use dioxus::prelude::*;

use crate::core::services::SiteServices;
use crate::core::timing::sleep_ms;
use crate::t;

use super::probe::{probe_assets, CtaState};

#[component]
pub fn CompanionCta() -> Element {
    let services = use_context::<SiteServices>();
    let page = services.config.companion.page.clone();
    let embed_timeout_ms = services.config.companion.embed_timeout_ms;

    let probe = use_resource(move || {
        let services = services.clone();
        async move {
            let presence =
                probe_assets(services.fetcher.as_ref(), &services.config.companion.assets).await;
            if !presence.any_present() {
                tracing::warn!("companion assets missing: {:?}", presence.results);
            }
            CtaState::from_presence(&presence)
        }
    });
    let cta = probe().unwrap_or(CtaState::Probing);
    let probing = cta == CtaState::Probing;

    let mut embed_open = use_signal(|| false);
    let mut embed_loaded = use_signal(|| false);
    let mut embed_stalled = use_signal(|| false);

    let toggle_preview = move |_| {
        if embed_open() {
            embed_open.set(false);
            return;
        }
        embed_open.set(true);
        embed_loaded.set(false);
        embed_stalled.set(false);
        // Only inspects the frame; the frame keeps loading either way.
        spawn(async move {
            sleep_ms(embed_timeout_ms).await;
            if embed_open() && !embed_loaded() {
                tracing::warn!("companion preview did not load within {embed_timeout_ms} ms");
                embed_stalled.set(true);
            }
        });
    };

    rsx! {
        div { class: "companion",
            if cta.is_interactive() {
                div { class: "companion__actions",
                    a {
                        class: "button button--accent companion__cta",
                        href: "{page}",
                        target: "_blank",
                        rel: "noopener",
                        aria_busy: "{probing}",
                        {t!("companion-open")}
                    }
                    if cta == CtaState::Available {
                        button {
                            r#type: "button",
                            class: "button button--ghost companion__preview-toggle",
                            aria_expanded: "{embed_open()}",
                            onclick: toggle_preview,
                            if embed_open() { {t!("companion-preview-hide")} } else { {t!("companion-preview-show")} }
                        }
                    }
                }

                if embed_open() {
                    iframe {
                        class: "companion__embed",
                        src: "{page}",
                        title: t!("companion-preview-title"),
                        onload: move |_| embed_loaded.set(true),
                    }
                    if embed_stalled() {
                        p { class: "companion__note", {t!("companion-preview-stalled")} }
                    }
                }
            } else {
                {unavailable_cta()}
            }
        }
    }
}

/// Disabled stand-in shown when none of the companion assets exist.
fn unavailable_cta() -> Element {
    rsx! {
        div { class: "companion__actions",
            a {
                class: "button button--accent companion__cta companion__cta--disabled",
                role: "link",
                aria_disabled: "true",
                tabindex: "-1",
                onclick: move |evt| evt.prevent_default(),
                {t!("companion-unavailable-label")}
            }
            span { class: "companion__note", {t!("companion-unavailable-note")} }
        }
    }
}
