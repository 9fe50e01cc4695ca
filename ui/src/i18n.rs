//! Localized strings for the site.
//!
//! Every user-facing string lives in `i18n/<locale>/protector-ui.ftl` and is
//! looked up through [`t!`](crate::t), which expands to a compile-time checked
//! `fl!` call against the shared [`LOADER`]. `en-US` is the fallback and the
//! reference file; a second locale directory makes the navbar show a picker.
//!
//! Locale negotiation uses the OS locale list on desktop and
//! `navigator.languages` on the web.

use std::collections::BTreeSet;
use std::sync::Once;

use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::I18nEmbedError;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translate a message ID, optionally with Fluent arguments:
/// `t!("readme-show")`, `t!("snippets-source", file = "fraud.py")`.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; also the FTL file name in every locale directory.
const DOMAIN: &str = "protector-ui";
const FALLBACK_LOCALE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Translations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LOCALE
        .parse()
        .expect("fallback locale must be a valid identifier");
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("`{0}` is not a language tag")]
    InvalidTag(String),
    #[error(transparent)]
    Load(#[from] I18nEmbedError),
}

/// Load the best matching locale once; safe to call from every component.
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        match i18n_embed::select(&*LOADER, &Translations, &requested) {
            Ok(selected) => tracing::debug!("locales selected: {selected:?}"),
            Err(err) => tracing::warn!("locale selection failed ({err}); using {FALLBACK_LOCALE}"),
        }
        disable_isolation();
    });
}

/// Switch the active locale at runtime.
pub fn set_language(tag: &str) -> Result<(), LanguageError> {
    let lang: LanguageIdentifier = tag
        .parse()
        .map_err(|_| LanguageError::InvalidTag(tag.to_string()))?;
    i18n_embed::select(&*LOADER, &Translations, &[lang])?;
    disable_isolation();
    Ok(())
}

/// Messages land in code blocks and alert boxes, where bidi marks would show.
/// `select` builds fresh bundles with isolation on, so this runs after every load.
fn disable_isolation() {
    LOADER.set_use_isolating(false);
}

/// Locale directories embedded in the binary, sorted.
pub fn available_languages() -> Vec<String> {
    Translations::iter()
        .filter_map(|path| path.split_once('/').map(|(locale, _)| locale.to_string()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
