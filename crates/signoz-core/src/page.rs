//! Page identifiers.

/// A lazily loaded page mounted into the content region.
///
/// Each page is its own bundle; the [`ModuleCache`](crate::ModuleCache) is
/// keyed by this id, so two routes mounting the same page share one fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageId {
    /// Services overview (home).
    ServicesTable,
    /// Metrics for a single service.
    ServiceMetrics,
    ServiceMap,
    /// Trace search and list.
    TraceDetail,
    /// Span graph for a single trace.
    TraceGraph,
    UsageExplorer,
    Settings,
    /// Instrumentation onboarding.
    Instrumentation,
}

impl PageId {
    pub const ALL: [PageId; 8] = [
        Self::ServicesTable,
        Self::ServiceMetrics,
        Self::ServiceMap,
        Self::TraceDetail,
        Self::TraceGraph,
        Self::UsageExplorer,
        Self::Settings,
        Self::Instrumentation,
    ];

    /// Bundle name, used to build the bundle URL.
    pub fn slug(self) -> &'static str {
        match self {
            Self::ServicesTable => "services-table",
            Self::ServiceMetrics => "service-metrics",
            Self::ServiceMap => "service-map",
            Self::TraceDetail => "trace-detail",
            Self::TraceGraph => "trace-graph",
            Self::UsageExplorer => "usage-explorer",
            Self::Settings => "settings",
            Self::Instrumentation => "add-instrumentation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::ServicesTable => "Services",
            Self::ServiceMetrics => "Service Metrics",
            Self::ServiceMap => "Service Map",
            Self::TraceDetail => "Traces",
            Self::TraceGraph => "Trace Graph",
            Self::UsageExplorer => "Usage Explorer",
            Self::Settings => "Settings",
            Self::Instrumentation => "Add Instrumentation",
        }
    }
}

impl std::fmt::Display for PageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
