use dioxus::prelude::*;

use crate::core::fetch::fetch_text;
use crate::core::markdown::{document_title, RenderedDocument};
use crate::core::services::SiteServices;
use crate::t;

use super::toggle::{DocumentToggle, ToggleAction};

#[derive(Debug, Clone, PartialEq)]
enum ReadmeContent {
    Empty,
    Ready(RenderedDocument),
    Failed,
}

#[component]
pub fn ReadmePanel() -> Element {
    let services = use_context::<SiteServices>();
    let mut toggle = use_signal(DocumentToggle::new);
    let mut content = use_signal(|| ReadmeContent::Empty);
    let mut title = use_signal(|| Option::<String>::None);

    let on_toggle = move |_| {
        let action = toggle.with_mut(|state| state.toggle());
        if action != ToggleAction::ShowAndFetch {
            return;
        }
        // A retry after a failed load starts from the loading state.
        content.set(ReadmeContent::Empty);

        let services = services.clone();
        spawn(async move {
            let path = services.config.documents.readme.clone();
            match fetch_text(services.fetcher.as_ref(), &path).await {
                Ok(markdown) => {
                    title.set(document_title(&markdown));
                    content.set(ReadmeContent::Ready(services.render.render(&markdown)));
                    toggle.with_mut(|state| state.finish_load(true));
                }
                Err(err) => {
                    tracing::error!("Failed to load {path}: {err}");
                    content.set(ReadmeContent::Failed);
                    toggle.with_mut(|state| state.finish_load(false));
                }
            }
        });
    };

    let state = toggle();
    let expanded = state.is_expanded();
    let label = if expanded {
        t!("readme-hide")
    } else {
        t!("readme-show")
    };

    rsx! {
        section { class: "readme",
            div { class: "readme__header",
                button {
                    r#type: "button",
                    class: "button button--primary readme__toggle",
                    aria_controls: "readme-container",
                    aria_pressed: "{expanded}",
                    onclick: on_toggle,
                    "{label}"
                }
                if let Some(caption) = title() {
                    span { class: "readme__caption", "{caption}" }
                }
            }

            {readme_container(expanded, content(), state.is_loading())}
        }
    }
}

/// Toggling only flips `hidden`; the rendered document is kept as is.
fn readme_container(expanded: bool, content: ReadmeContent, loading: bool) -> Element {
    let body = match content {
        ReadmeContent::Empty if loading => rsx! {
            p { class: "readme__status", {t!("readme-loading")} }
        },
        ReadmeContent::Empty => rsx! {},
        ReadmeContent::Ready(RenderedDocument::Html(html)) => rsx! {
            div { class: "readme__body", dangerous_inner_html: "{html}" }
        },
        // Text node only; the markup is never interpreted.
        ReadmeContent::Ready(RenderedDocument::PlainText(text)) => rsx! {
            pre { class: "readme__body readme__body--plain", "{text}" }
        },
        ReadmeContent::Failed => rsx! {
            p { class: "readme__error",
                em { {t!("readme-error")} }
            }
        },
    };

    rsx! {
        div {
            id: "readme-container",
            class: "readme__container",
            hidden: !expanded,
            {body}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Props, Clone, PartialEq)]
    struct ContainerProps {
        expanded: bool,
        content: ReadmeContent,
        loading: bool,
    }

    #[allow(non_snake_case)]
    fn Container(props: ContainerProps) -> Element {
        readme_container(props.expanded, props.content, props.loading)
    }

    fn render(expanded: bool, content: ReadmeContent, loading: bool) -> String {
        crate::i18n::init();
        let mut dom = VirtualDom::new_with_props(
            Container,
            ContainerProps {
                expanded,
                content,
                loading,
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn show_hide_show_keeps_rendered_document() {
        let document = ReadmeContent::Ready(RenderedDocument::Html(
            "<h1>Protector Model</h1><p>Baseline</p>".into(),
        ));
        let mut toggle = DocumentToggle::new();

        assert_eq!(toggle.toggle(), ToggleAction::ShowAndFetch);
        toggle.finish_load(true);
        let first = render(toggle.is_expanded(), document.clone(), toggle.is_loading());

        assert_eq!(toggle.toggle(), ToggleAction::Hide);
        let hidden = render(toggle.is_expanded(), document.clone(), toggle.is_loading());

        assert_eq!(toggle.toggle(), ToggleAction::Show);
        let again = render(toggle.is_expanded(), document, toggle.is_loading());

        assert!(first.contains("<p>Baseline</p>"), "{first}");
        assert_eq!(first, again);
        assert_ne!(first, hidden);
        assert!(hidden.contains("<p>Baseline</p>"), "{hidden}");
    }

    #[test]
    fn plain_text_is_not_interpreted() {
        let html = render(
            true,
            ReadmeContent::Ready(RenderedDocument::PlainText("<b>raw</b>".into())),
            false,
        );
        assert!(!html.contains("<b>raw</b>"), "{html}");
        assert!(html.contains("readme__body--plain"), "{html}");
    }

    #[test]
    fn retry_shows_loading_instead_of_stale_error() {
        let html = render(true, ReadmeContent::Empty, true);
        assert!(html.contains("readme__status"), "{html}");
        assert!(!html.contains("readme__error"), "{html}");
    }
}
