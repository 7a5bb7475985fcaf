//! Sider navigation entries.
//!
//! Every entry's target must be declared in the route table; nothing links
//! the two automatically, so [`unresolved_links`] exists for startup checks
//! and tests.

use crate::route::{MatchKind, RoutePattern, RouteTable};

/// Icon shown next to (or instead of) a nav label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavIcon {
    Metrics,
    Traces,
    ServiceMap,
    UsageExplorer,
    Settings,
    Instrumentation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLinkEntry {
    /// Stable menu key.
    pub key: &'static str,
    pub label: &'static str,
    pub icon: NavIcon,
    pub target: &'static str,
}

impl NavLinkEntry {
    /// Whether the current location is inside this entry's section.
    pub fn is_active(&self, path: &str) -> bool {
        RoutePattern::parse(self.target)
            .matches(path, MatchKind::Prefix)
            .is_some()
    }
}

/// Sider entries, top to bottom.
pub const NAV_LINKS: &[NavLinkEntry] = &[
    NavLinkEntry {
        key: "1",
        label: "Metrics",
        icon: NavIcon::Metrics,
        target: "/application",
    },
    NavLinkEntry {
        key: "2",
        label: "Traces",
        icon: NavIcon::Traces,
        target: "/traces",
    },
    NavLinkEntry {
        key: "3",
        label: "Service Map",
        icon: NavIcon::ServiceMap,
        target: "/service-map",
    },
    NavLinkEntry {
        key: "4",
        label: "Usage Explorer",
        icon: NavIcon::UsageExplorer,
        target: "/usage-explorer",
    },
    NavLinkEntry {
        key: "5",
        label: "Settings",
        icon: NavIcon::Settings,
        target: "/settings",
    },
    NavLinkEntry {
        key: "6",
        label: "Add instrumentation",
        icon: NavIcon::Instrumentation,
        target: "/add-instrumentation",
    },
];

/// The first entry active for `path`, if any.
pub fn active_link(path: &str) -> Option<&'static NavLinkEntry> {
    NAV_LINKS.iter().find(|link| link.is_active(path))
}

/// Entries whose target is not declared in `table`.
pub fn unresolved_links(table: &RouteTable) -> Vec<&'static NavLinkEntry> {
    NAV_LINKS
        .iter()
        .filter(|link| !table.declares(link.target))
        .collect()
}
