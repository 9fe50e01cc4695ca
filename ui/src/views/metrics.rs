use dioxus::prelude::*;

use crate::widgets::metrics::MetricsPanel;
use crate::widgets::snippets::SnippetsPanel;

#[component]
pub fn Metrics() -> Element {
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-metrics",
            h1 { {crate::t!("page-metrics-title")} }
            p { {crate::t!("page-metrics-intro")} }

            MetricsPanel {}
            SnippetsPanel {}
        }
    }
}
