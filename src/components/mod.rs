//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point) and [`Link`]
//! - [`shell`] - Layout frame: sider, header row, content, footer
//! - [`sider`] - Logo, theme switch, navigation menu, collapse trigger
//! - [`header`] - Breadcrumbs and time range selector
//! - [`content`] - Deferred page mount with error boundary
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod content;
pub mod header;
pub mod icons;
pub mod router;
pub mod shell;
pub mod sider;

pub use router::{AppRouter, Link};
