//! Everything a widget needs from its host, provided once as Dioxus context.

use std::rc::Rc;

use super::config::SiteConfig;
use super::fetch::Fetcher;
use super::markdown::RenderCapabilities;

#[derive(Clone)]
pub struct SiteServices {
    pub fetcher: Rc<dyn Fetcher>,
    pub render: RenderCapabilities,
    pub config: Rc<SiteConfig>,
}

impl SiteServices {
    pub fn new(fetcher: Rc<dyn Fetcher>, render: RenderCapabilities, config: SiteConfig) -> Self {
        Self {
            fetcher,
            render,
            config: Rc::new(config),
        }
    }
}
