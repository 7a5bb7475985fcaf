//! Page components mounted into the content region.
//!
//! Each page is resolved from its bundle (a [`PageManifest`]) before it is
//! rendered; [`render`] picks the component for a loaded [`PageModule`].

mod metrics;
mod service_map;
mod settings;
mod traces;
mod usage;

use leptos::prelude::*;
use serde::Deserialize;
use signoz_core::{PageId, RouteParams};

use metrics::{ServiceMetrics, ServicesTable};
use service_map::ServiceMap;
use settings::{InstrumentationPage, SettingsPage};
use traces::{TraceDetail, TraceGraph};
use usage::UsageExplorer;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// Contents of a page bundle.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PageManifest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

/// A resolved page, ready to mount.
#[derive(Clone, Debug, PartialEq)]
pub struct PageModule {
    pub page: PageId,
    pub manifest: PageManifest,
}

/// Render the component for `module` with the parameters of the matched route.
pub fn render(module: &PageModule, params: &RouteParams) -> AnyView {
    let manifest = module.manifest.clone();
    let param = |name: &str| params.get(name).unwrap_or_default().to_string();

    match module.page {
        PageId::ServicesTable => view! { <ServicesTable manifest=manifest /> }.into_any(),
        PageId::ServiceMetrics => {
            view! { <ServiceMetrics manifest=manifest service=param("servicename") /> }.into_any()
        }
        PageId::ServiceMap => view! { <ServiceMap manifest=manifest /> }.into_any(),
        PageId::TraceDetail => view! { <TraceDetail manifest=manifest /> }.into_any(),
        PageId::TraceGraph => view! { <TraceGraph manifest=manifest trace_id=param("id") /> }.into_any(),
        PageId::UsageExplorer => view! { <UsageExplorer manifest=manifest /> }.into_any(),
        PageId::Settings => view! { <SettingsPage manifest=manifest /> }.into_any(),
        PageId::Instrumentation => view! { <InstrumentationPage manifest=manifest /> }.into_any(),
    }
}

/// Common page chrome: title, description, highlights, then page body.
#[component]
fn PageFrame(manifest: PageManifest, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let PageManifest {
        title,
        description,
        highlights,
    } = manifest;

    let highlights = (!highlights.is_empty()).then(|| {
        view! {
            <ul class=css::highlights>
                {highlights.into_iter().map(|h| view! { <li>{h}</li> }).collect_view()}
            </ul>
        }
    });

    view! {
        <section class=css::page>
            <h2 class=css::title>{title}</h2>
            <p class=css::description>{description}</p>
            {highlights}
            {children.map(|children| view! { <div class=css::body>{children()}</div> })}
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manifest_source(page: PageId) -> &'static str {
        match page {
            PageId::ServicesTable => include_str!("../../assets/pages/services-table.json"),
            PageId::ServiceMetrics => include_str!("../../assets/pages/service-metrics.json"),
            PageId::ServiceMap => include_str!("../../assets/pages/service-map.json"),
            PageId::TraceDetail => include_str!("../../assets/pages/trace-detail.json"),
            PageId::TraceGraph => include_str!("../../assets/pages/trace-graph.json"),
            PageId::UsageExplorer => include_str!("../../assets/pages/usage-explorer.json"),
            PageId::Settings => include_str!("../../assets/pages/settings.json"),
            PageId::Instrumentation => include_str!("../../assets/pages/add-instrumentation.json"),
        }
    }

    #[test]
    fn test_bundled_manifests_parse() {
        for page in PageId::ALL {
            let manifest: PageManifest = serde_json::from_str(manifest_source(page))
                .unwrap_or_else(|e| panic!("{}: {}", page, e));
            assert_eq!(manifest.title, page.title(), "{}", page);
        }
    }

    #[test]
    fn test_highlights_optional() {
        let manifest: PageManifest =
            serde_json::from_str(r#"{"title": "T", "description": "D"}"#).unwrap();
        assert!(manifest.highlights.is_empty());
    }
}
