//! Presence check for the companion model page and its assets.

use futures_util::future::join_all;

use crate::core::config::MAX_COMPANION_ASSETS;
use crate::core::fetch::{asset_exists, Fetcher};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetPresence {
    pub results: Vec<(String, bool)>,
}

impl AssetPresence {
    pub fn any_present(&self) -> bool {
        self.results.iter().any(|(_, present)| *present)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CtaState {
    Probing,
    Available,
    /// Nothing to link to: the control is rendered disabled.
    Unavailable,
}

impl CtaState {
    pub fn from_presence(presence: &AssetPresence) -> Self {
        if presence.any_present() {
            CtaState::Available
        } else {
            CtaState::Unavailable
        }
    }

    pub fn is_interactive(self) -> bool {
        self != CtaState::Unavailable
    }
}

/// Probe up to three assets concurrently.
pub async fn probe_assets(fetcher: &dyn Fetcher, assets: &[String]) -> AssetPresence {
    let probes = assets
        .iter()
        .take(MAX_COMPANION_ASSETS)
        .map(|asset| async move { (asset.clone(), asset_exists(fetcher, asset).await) });
    AssetPresence {
        results: join_all(probes).await,
    }
}
