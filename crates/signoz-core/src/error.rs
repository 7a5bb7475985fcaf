//! Error types shared by the shell.
//!
//! - [`LoadError`] - Page bundle resolution failures
//! - [`ThemeError`] - Theme activation failures reported by a [`ThemeService`](crate::ThemeService)
//! - [`ConfigError`] - Shell configuration parsing and validation
//! - [`ParseThemeError`], [`ParseTimeRangeError`] - String conversions

use thiserror::Error;

use crate::theme::Theme;

/// Failure to resolve a page bundle.
///
/// Cached by the [`ModuleCache`](crate::ModuleCache) and handed to the
/// enclosing error boundary; the loader never retries on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The bundle request did not settle in time.
    #[error("page bundle request timed out")]
    Timeout,
    /// Network-level failure (offline, CORS, aborted).
    #[error("page bundle request failed: {0}")]
    Network(String),
    /// Non-2xx response.
    #[error("page bundle returned HTTP {0}")]
    Http(u16),
    /// The bundle arrived but could not be decoded.
    #[error("malformed page bundle: {0}")]
    Malformed(String),
}

/// Failure reported by a theme service while activating a theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeError {
    /// The host has no document to attach a stylesheet to.
    #[error("theme service unavailable: {0}")]
    Unavailable(String),
    /// The stylesheet for the theme failed to load.
    #[error("stylesheet for the {0} theme failed to load")]
    StylesheetFailed(Theme),
    /// The stylesheet did not finish loading in time.
    #[error("stylesheet for the {0} theme timed out")]
    Timeout(Theme),
}

/// Shell configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The TOML document could not be parsed.
    #[error("failed to parse shell configuration: {0}")]
    Parse(String),
    /// A value parsed but violates a constraint.
    #[error("invalid shell configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.message().to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme '{0}' (expected 'dark' or 'light')")]
pub struct ParseThemeError(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown time range '{0}'")]
pub struct ParseTimeRangeError(pub String);
