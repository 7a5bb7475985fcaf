//! Platform-independent core of the dashboard shell.
//!
//! Everything in here is plain Rust with no browser dependency, so the
//! shell's behavior can be exercised natively:
//!
//! - [`RouteTable`] - Prioritised path → page matching with route parameters
//! - [`PageLoader`], [`ModuleCache`] - Deferred page loading with a per-page cache
//! - [`ThemeController`], [`ThemeService`] - Theme switching against an injected service
//! - [`ShellState`], [`ShellAction`] - UI state snapshot and its reducer
//! - [`NAV_LINKS`] - Sider navigation entries
//! - [`breadcrumbs`], [`TimeRange`] - Header row models
//! - [`ShellConfig`] - TOML shell configuration

mod breadcrumb;
pub mod config;
pub mod error;
pub mod loader;
pub mod nav;
mod page;
pub mod route;
mod state;
pub mod theme;
mod time_range;

pub use breadcrumb::{Crumb, breadcrumbs};
pub use config::ShellConfig;
pub use error::{ConfigError, LoadError, ParseThemeError, ParseTimeRangeError, ThemeError};
pub use loader::{ContentView, LoadOutcome, ModuleCache, ModuleFetcher, ModuleState, Navigation, PageLoader};
pub use nav::{NAV_LINKS, NavIcon, NavLinkEntry};
pub use page::PageId;
pub use route::{MatchKind, RouteEntry, RouteMatch, RouteParams, RoutePattern, RouteTable, ShadowedRoute};
pub use state::{ShellAction, ShellState};
pub use theme::{Theme, ThemeController, ThemeService, ThemeStatus};
pub use time_range::TimeRange;
