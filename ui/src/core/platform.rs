//! Platform glue: browser APIs on the web, quiet fallbacks elsewhere.

use super::markdown::RenderCapabilities;

/// URL the page was served from; relative resource paths resolve against it.
#[cfg(target_arch = "wasm32")]
pub fn document_base_url() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn document_base_url() -> Option<String> {
    None
}

/// Modal notice the user has to dismiss. Native builds only log it.
pub fn blocking_notice(message: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.alert_with_message(message).is_err() {
                tracing::error!("{message}");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    tracing::error!("{message}");
}

/// Converter and sanitizer taken from the page's `marked` and `DOMPurify`
/// globals. Either may be absent, in which case documents render as text.
#[cfg(target_arch = "wasm32")]
pub fn browser_render_capabilities() -> RenderCapabilities {
    use std::rc::Rc;

    use super::markdown::{HtmlSanitizer, MarkdownConverter};

    let converter = browser::JsMethod::lookup("marked", "parse")
        .map(|method| Rc::new(browser::Marked(method)) as Rc<dyn MarkdownConverter>);
    let sanitizer = browser::JsMethod::lookup("DOMPurify", "sanitize")
        .map(|method| Rc::new(browser::DomPurify(method)) as Rc<dyn HtmlSanitizer>);

    if converter.is_none() || sanitizer.is_none() {
        tracing::warn!("marked/DOMPurify not found on window; documents render as plain text");
    }
    RenderCapabilities::new(converter, sanitizer)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn browser_render_capabilities() -> RenderCapabilities {
    RenderCapabilities::plain_text()
}

#[cfg(target_arch = "wasm32")]
mod browser {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    use crate::core::markdown::{HtmlSanitizer, MarkdownConverter};

    pub struct JsMethod {
        target: JsValue,
        method: Function,
    }

    impl JsMethod {
        pub fn lookup(global: &str, method: &str) -> Option<Self> {
            let window = web_sys::window()?;
            let target = Reflect::get(window.as_ref(), &JsValue::from_str(global)).ok()?;
            if target.is_undefined() || target.is_null() {
                return None;
            }
            let method = Reflect::get(&target, &JsValue::from_str(method))
                .ok()?
                .dyn_into::<Function>()
                .ok()?;
            Some(Self { target, method })
        }

        fn call(&self, input: &str) -> Option<String> {
            self.method
                .call1(&self.target, &JsValue::from_str(input))
                .ok()?
                .as_string()
        }
    }

    pub struct Marked(pub JsMethod);

    impl MarkdownConverter for Marked {
        fn to_html(&self, markdown: &str) -> String {
            self.0.call(markdown).unwrap_or_else(|| {
                tracing::error!("marked.parse failed; showing escaped source");
                format!("<pre>{}</pre>", escape_html(markdown))
            })
        }
    }

    pub struct DomPurify(pub JsMethod);

    impl HtmlSanitizer for DomPurify {
        fn sanitize(&self, html: &str) -> String {
            // Nothing unsanitized may reach the page.
            self.0.call(html).unwrap_or_else(|| {
                tracing::error!("DOMPurify.sanitize failed; dropping markup");
                String::new()
            })
        }
    }

    fn escape_html(raw: &str) -> String {
        raw.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }
}
