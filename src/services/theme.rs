//! Stylesheet-based theme switching.

use js_sys::Promise;
use leptos::logging::{log, warn};
use signoz_core::config::ThemeConfig;
use signoz_core::{Theme, ThemeError, ThemeService};

use crate::config::THEME_LINK_ID;
use crate::utils::{RaceResult, dom, race_with_timeout};

/// Activates a theme by pointing a single `<link rel="stylesheet">` at the
/// theme's CSS and resolving once the browser reports `load`.
pub struct StylesheetThemeService {
    config: ThemeConfig,
}

impl StylesheetThemeService {
    pub fn new(config: ThemeConfig) -> Self {
        Self { config }
    }
}

impl ThemeService for StylesheetThemeService {
    async fn activate(&self, theme: Theme) -> Result<(), ThemeError> {
        let href = self.config.stylesheet(theme);
        let link = dom::stylesheet_link(THEME_LINK_ID)
            .ok_or_else(|| ThemeError::Unavailable("document head not available".to_string()))?;

        // Same href again would never fire `load`
        if link.get_attribute("href").as_deref() == Some(href) {
            return Ok(());
        }

        let loaded = Promise::new(&mut |resolve, reject| {
            link.set_onload(Some(&resolve));
            link.set_onerror(Some(&reject));
        });

        log!("activating {} theme ({})", theme, href);
        link.set_href(href);

        let outcome = race_with_timeout(loaded, self.config.timeout_ms).await;
        link.set_onload(None);
        link.set_onerror(None);

        match outcome {
            RaceResult::Completed(_) => Ok(()),
            RaceResult::TimedOut => {
                warn!("{} theme stylesheet timed out", theme);
                Err(ThemeError::Timeout(theme))
            }
            RaceResult::Error(msg) => {
                warn!("{} theme stylesheet failed: {}", theme, msg);
                Err(ThemeError::StylesheetFailed(theme))
            }
        }
    }
}
