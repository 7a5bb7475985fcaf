//! Application configuration.
//!
//! Centralizes the constants used throughout the application. The shell
//! configuration is embedded at compile time with `include_str!` and parsed
//! once on startup.

use leptos::logging::warn;
use signoz_core::ShellConfig;

// =============================================================================
// Embedded Assets (loaded at compile time)
// =============================================================================

/// Shell configuration (TOML), see [`ShellConfig`].
pub const SHELL_CONFIG_TOML: &str = include_str!("../assets/config/shell.toml");

// =============================================================================
// DOM Configuration
// =============================================================================

/// Id of the element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Id of the `<link>` element carrying the active theme stylesheet.
pub const THEME_LINK_ID: &str = "theme-stylesheet";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Shell Configuration
// =============================================================================

/// Parse the embedded shell configuration.
///
/// An invalid document is logged and replaced by the defaults; the shell
/// must still come up.
pub fn shell_config() -> ShellConfig {
    match ShellConfig::from_toml_str(SHELL_CONFIG_TOML) {
        Ok(config) => config,
        Err(err) => {
            warn!("{}; falling back to defaults", err);
            ShellConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = ShellConfig::from_toml_str(SHELL_CONFIG_TOML).unwrap();
        assert_eq!(config.sider.width, 160);
        assert_eq!(config.sider.collapsed_width, 80);
        assert_eq!(config.product.footer, "SigNoz Inc. ©2020");
    }
}
