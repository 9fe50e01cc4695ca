//! Site configuration: where each widget fetches its resource from.
//!
//! The shipped defaults live in `site.toml` next to the crate manifest and are
//! embedded at compile time. Every field is optional; anything missing falls
//! back to the built-in value.

use serde::Deserialize;

/// The most assets the companion probe will look at.
pub const MAX_COMPANION_ASSETS: usize = 3;

const EMBEDDED_SITE_TOML: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/site.toml"));

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site.toml is malformed: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub documents: DocumentPaths,
    pub companion: CompanionConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DocumentPaths {
    /// Markdown document shown by the README toggle.
    pub readme: String,
    /// JSON metrics record.
    pub metrics: String,
    /// Python source scraped for snippets.
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CompanionConfig {
    pub page: String,
    pub assets: Vec<String>,
    pub embed_timeout_ms: u64,
}

impl Default for DocumentPaths {
    fn default() -> Self {
        Self {
            readme: "./data/external/fraud.md".into(),
            metrics: "./signals/baseline_metrics.json".into(),
            source: "./fraud.py".into(),
        }
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self {
            page: "./model.html".into(),
            assets: vec![
                "./model.html".into(),
                "./model.js".into(),
                "./model.css".into(),
            ],
            embed_timeout_ms: 3_000,
        }
    }
}

impl SiteConfig {
    /// Parse a TOML document, clamping the companion asset list.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let mut config: SiteConfig = toml::from_str(raw)?;
        config.companion.assets.truncate(MAX_COMPANION_ASSETS);
        Ok(config)
    }

    /// Load the embedded `site.toml`, falling back to defaults when it can't be parsed.
    pub fn load() -> Self {
        match Self::from_toml_str(EMBEDDED_SITE_TOML) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("{err}; using built-in site defaults");
                Self::default()
            }
        }
    }
}
