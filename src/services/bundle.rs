//! Page bundle fetching.

use leptos::logging::log;
use signoz_core::config::PagesConfig;
use signoz_core::{LoadError, ModuleFetcher, PageId};

use crate::pages::{PageManifest, PageModule};
use crate::utils::fetch_json;

/// Resolves a page by fetching its manifest from `PagesConfig::base_url`.
pub struct BundleFetcher {
    config: PagesConfig,
}

impl BundleFetcher {
    pub fn new(config: PagesConfig) -> Self {
        Self { config }
    }
}

impl ModuleFetcher<PageModule> for BundleFetcher {
    async fn fetch(&self, page: PageId) -> Result<PageModule, LoadError> {
        let url = self.config.bundle_url(page);
        log!("fetching page bundle {}", url);

        let manifest: PageManifest =
            fetch_json(&url, self.config.fetch_timeout_ms).await?;
        Ok(PageModule { page, manifest })
    }
}
