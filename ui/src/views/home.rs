use dioxus::prelude::*;

use crate::widgets::companion::CompanionCta;
use crate::widgets::readme::ReadmePanel;

#[component]
pub fn Home() -> Element {
    // Subscribe to global language code (if provided) so we re-render on change.
    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let lang_marker = lang_code.as_ref().map(|s| s()).unwrap_or_default();

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-home",
            h1 { {crate::t!("home-title")} }
            p { {crate::t!("home-tagline")} }
            p { {crate::t!("home-intro")} }

            CompanionCta {}
            ReadmePanel {}
        }
    }
}
