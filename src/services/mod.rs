//! Browser implementations of the core's service seams.
//!
//! - [`StylesheetThemeService`] - Swaps the theme `<link>` and waits for it to load
//! - [`BundleFetcher`] - Fetches page bundles (JSON manifests) over HTTP

mod bundle;
mod theme;

pub use bundle::BundleFetcher;
pub use theme::StylesheetThemeService;
