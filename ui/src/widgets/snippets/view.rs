use dioxus::prelude::*;

use crate::core::fetch::fetch_text;
use crate::core::services::SiteServices;
use crate::t;

use super::extract::{extract, Excerpt, SnippetSet};

#[component]
pub fn SnippetsPanel() -> Element {
    let services = use_context::<SiteServices>();
    let source_name = file_name(&services.config.documents.source);

    let snippets = use_resource(move || {
        let services = services.clone();
        async move { load_snippets(&services).await }
    });

    let loading = snippets().is_none();
    let set = snippets().unwrap_or_else(SnippetSet::unavailable);

    rsx! {
        section { class: "snippets-card",
            div { class: "snippets-card__header",
                h2 { {t!("snippets-title")} }
                span { class: "snippets-card__meta", {t!("snippets-source", file = source_name.clone())} }
            }

            {snippet_slot("code-cleaning", t!("snippets-cleaning"), &set.cleaning, loading, &source_name)}
            {snippet_slot("code-regression", t!("snippets-regression"), &set.regression, loading, &source_name)}
            {snippet_slot("code-exports", t!("snippets-exports"), &set.exports, loading, &source_name)}
        }
    }
}

/// Fetch failures fill every slot with the "not found" placeholder.
async fn load_snippets(services: &SiteServices) -> SnippetSet {
    let path = services.config.documents.source.as_str();
    match fetch_text(services.fetcher.as_ref(), path).await {
        Ok(source) => {
            let set = extract(&source);
            tracing::debug!(
                cleaning = ?set.cleaning.rule(),
                regression = ?set.regression.rule(),
                exports = ?set.exports.rule(),
                "extracted snippets from {path}"
            );
            set
        }
        Err(err) => {
            tracing::error!("Failed to load {path}: {err}");
            SnippetSet::unavailable()
        }
    }
}

fn snippet_slot(
    id: &'static str,
    title: String,
    excerpt: &Excerpt,
    loading: bool,
    source_name: &str,
) -> Element {
    let (text, placeholder) = match excerpt {
        Excerpt::Found { text, .. } => (text.clone(), false),
        _ if loading => (t!("snippets-loading"), true),
        Excerpt::NotFound => (t!("snippets-missing", file = source_name.to_string()), true),
        Excerpt::SourceUnavailable => (t!("snippets-unavailable", file = source_name.to_string()), true),
    };
    let code_class = if placeholder {
        "snippet__code snippet__code--placeholder"
    } else {
        "snippet__code language-python"
    };

    rsx! {
        figure { class: "snippet",
            figcaption { class: "snippet__title", "{title}" }
            pre { class: "snippet__pre",
                code { id: "{id}", class: "{code_class}", "{text}" }
            }
        }
    }
}

fn file_name(path: &str) -> String {
    path.rsplit('/').next().unwrap_or(path).to_string()
}
