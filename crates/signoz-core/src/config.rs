//! Shell configuration.
//!
//! Loaded from TOML. Every section and key is optional; missing values take
//! the defaults below.
//!
//! ```toml
//! [product]
//! name = "SigNoz"
//!
//! [sider]
//! width = 160
//! collapsed_width = 80
//!
//! [theme]
//! dark = "/themes/dark-theme.css"
//! light = "/themes/light-theme.css"
//! ```

use serde::Deserialize;

use crate::error::ConfigError;
use crate::page::PageId;
use crate::theme::Theme;
use crate::time_range::TimeRange;

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub product: ProductConfig,
    pub sider: SiderConfig,
    pub theme: ThemeConfig,
    pub pages: PagesConfig,
    pub time: TimeConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProductConfig {
    pub name: String,
    pub logo: String,
    pub footer: String,
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            name: "SigNoz".to_string(),
            logo: "/signoz.svg".to_string(),
            footer: "SigNoz Inc. ©2020".to_string(),
        }
    }
}

/// Sider geometry in CSS pixels.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiderConfig {
    pub width: u32,
    pub collapsed_width: u32,
    /// Viewport width below which the sider collapses on its own.
    pub auto_collapse_below: u32,
}

impl Default for SiderConfig {
    fn default() -> Self {
        Self {
            width: 160,
            collapsed_width: 80,
            auto_collapse_below: 992,
        }
    }
}

/// Stylesheet locations for each theme.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    pub dark: String,
    pub light: String,
    pub timeout_ms: u32,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            dark: "/themes/dark-theme.css".to_string(),
            light: "/themes/light-theme.css".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl ThemeConfig {
    pub fn stylesheet(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark,
            Theme::Light => &self.light,
        }
    }
}

/// Where page bundles are fetched from.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagesConfig {
    pub base_url: String,
    pub fetch_timeout_ms: u32,
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            base_url: "/pages".to_string(),
            fetch_timeout_ms: 10_000,
        }
    }
}

impl PagesConfig {
    pub fn bundle_url(&self, page: PageId) -> String {
        format!("{}/{}.json", self.base_url.trim_end_matches('/'), page.slug())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TimeConfig {
    pub default_range: TimeRange,
}

/// Longest accepted timeout; browser timers take a signed 32-bit delay.
pub const MAX_TIMEOUT_MS: u32 = i32::MAX as u32;

impl ShellConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sider.width == 0 {
            return Err(ConfigError::Invalid("sider.width must be positive".into()));
        }
        if self.sider.collapsed_width >= self.sider.width {
            return Err(ConfigError::Invalid(
                "sider.collapsed_width must be smaller than sider.width".into(),
            ));
        }
        for timeout in [self.theme.timeout_ms, self.pages.fetch_timeout_ms] {
            if timeout == 0 || timeout > MAX_TIMEOUT_MS {
                return Err(ConfigError::Invalid(format!(
                    "timeouts must be between 1 and {} ms",
                    MAX_TIMEOUT_MS
                )));
            }
        }
        if self.theme.dark.is_empty() || self.theme.light.is_empty() {
            return Err(ConfigError::Invalid(
                "theme stylesheet URLs must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        assert_eq!(ShellConfig::from_toml_str("").unwrap(), ShellConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = ShellConfig::from_toml_str(
            r#"
            [sider]
            width = 200

            [time]
            default_range = "1hr"
            "#,
        )
        .unwrap();

        assert_eq!(config.sider.width, 200);
        assert_eq!(config.sider.collapsed_width, 80);
        assert_eq!(config.time.default_range, TimeRange::LastHour);
        assert_eq!(config.product.footer, "SigNoz Inc. ©2020");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = ShellConfig::from_toml_str("[sider]\nheight = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_invalid_widths_rejected() {
        let err = ShellConfig::from_toml_str("[sider]\nwidth = 60\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_timeout_bounds() {
        let err = ShellConfig::from_toml_str("[pages]\nfetch_timeout_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ShellConfig::from_toml_str("[theme]\ntimeout_ms = 3000000000\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let config =
            ShellConfig::from_toml_str("[pages]\nfetch_timeout_ms = 2147483647\n").unwrap();
        assert_eq!(config.pages.fetch_timeout_ms, MAX_TIMEOUT_MS);
    }

    #[test]
    fn test_urls() {
        let config = ShellConfig::default();
        assert_eq!(config.theme.stylesheet(Theme::Light), "/themes/light-theme.css");

        let pages = PagesConfig {
            base_url: "https://cdn.example.com/pages/".to_string(),
            ..PagesConfig::default()
        };
        assert_eq!(
            pages.bundle_url(PageId::TraceGraph),
            "https://cdn.example.com/pages/trace-graph.json"
        );
    }
}
