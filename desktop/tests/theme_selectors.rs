#![cfg(test)]
/*!
Theme selector lint for the desktop build.

The widgets in `ui` emit fixed class names (metric grades, the disabled model
call-to-action, snippet slots). This checks the shared theme still styles them,
so a rename on one side fails here instead of silently unstyling the page.

If you intentionally rename or remove a selector, update the component markup
and REQUIRED_SELECTORS together.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".visually-hidden",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--accent",
    ".button--ghost",
    // Navbar
    ".navbar__inner",
    ".navbar__link",
    // Model call-to-action
    ".companion__actions",
    ".companion__cta--disabled",
    ".companion__note",
    ".companion__embed",
    // README toggle
    ".readme__header",
    ".readme__caption",
    ".readme__container",
    ".readme__body--plain",
    ".readme__error",
    // Metrics
    ".metrics-card",
    ".metrics-card__grid",
    ".metrics-card__error",
    ".metric__label",
    ".metric__value.ok",
    ".metric__value.warn",
    ".metric__value.bad",
    // Snippets
    ".snippets-card",
    ".snippet__pre",
    ".snippet__code--placeholder",
    "@media (max-width: 720px)",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let missing: Vec<&str> = REQUIRED_SELECTORS
        .iter()
        .copied()
        .filter(|sel| !THEME_CSS.contains(sel))
        .collect();

    assert!(
        missing.is_empty(),
        "Missing {} required CSS selectors/tokens in unified theme:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_000,
        "Embedded theme appears unexpectedly small ({non_ws_len} non-whitespace chars)"
    );
}
