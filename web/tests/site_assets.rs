//! The web build resolves every document against the page URL, so the
//! directory `Dioxus.toml` publishes must contain them. Otherwise the dev
//! server's index fallback answers each request with the app's own HTML.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use ui::core::config::SiteConfig;

#[derive(Deserialize)]
struct DioxusToml {
    application: Application,
}

#[derive(Deserialize)]
struct Application {
    asset_dir: PathBuf,
}

fn published_dir() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let raw = std::fs::read_to_string(manifest_dir.join("Dioxus.toml")).unwrap();
    let config: DioxusToml = toml::from_str(&raw).unwrap();
    manifest_dir.join(config.application.asset_dir)
}

#[test]
fn published_dir_holds_every_site_document() {
    let root = published_dir();
    let documents = SiteConfig::load().documents;
    for path in [&documents.readme, &documents.metrics, &documents.source] {
        let file = root.join(path.trim_start_matches("./"));
        assert!(file.is_file(), "{} is not published", file.display());
    }
}

#[test]
fn metrics_document_is_json() {
    let root = published_dir();
    let metrics = SiteConfig::load().documents.metrics;
    let raw = std::fs::read_to_string(root.join(metrics.trim_start_matches("./"))).unwrap();
    assert!(raw.trim_start().starts_with('{'), "{raw}");
}
