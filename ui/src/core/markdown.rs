//! Markdown rendering through injected capabilities.
//!
//! The converter and the sanitizer are supplied by the platform (the web
//! launcher wires the page's `marked` and `DOMPurify`). When either one is
//! missing the document is shown as plain text rather than interpreted.

use std::rc::Rc;

pub trait MarkdownConverter {
    fn to_html(&self, markdown: &str) -> String;
}

pub trait HtmlSanitizer {
    fn sanitize(&self, html: &str) -> String;
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedDocument {
    /// Sanitized markup, safe to inject.
    Html(String),
    /// Raw text, to be inserted as a text node.
    PlainText(String),
}

#[derive(Clone, Default)]
pub struct RenderCapabilities {
    converter: Option<Rc<dyn MarkdownConverter>>,
    sanitizer: Option<Rc<dyn HtmlSanitizer>>,
}

impl RenderCapabilities {
    pub fn new(
        converter: Option<Rc<dyn MarkdownConverter>>,
        sanitizer: Option<Rc<dyn HtmlSanitizer>>,
    ) -> Self {
        Self {
            converter,
            sanitizer,
        }
    }

    /// No converter, no sanitizer: everything renders as text.
    pub fn plain_text() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        self.converter.is_some() && self.sanitizer.is_some()
    }

    /// Convert, then sanitize. Never returns unsanitized markup.
    pub fn render(&self, markdown: &str) -> RenderedDocument {
        match (&self.converter, &self.sanitizer) {
            (Some(converter), Some(sanitizer)) => {
                let html = converter.to_html(markdown);
                RenderedDocument::Html(sanitizer.sanitize(&html))
            }
            _ => RenderedDocument::PlainText(markdown.to_string()),
        }
    }
}

/// Title from the first top-level heading (`# Title`, not `## Title`).
pub fn document_title(markdown: &str) -> Option<String> {
    markdown.lines().find_map(|line| {
        let rest = line.strip_prefix('#')?;
        if rest.starts_with('#') || !rest.starts_with(char::is_whitespace) {
            return None;
        }
        let title = rest.trim();
        (!title.is_empty()).then(|| title.to_string())
    })
}
