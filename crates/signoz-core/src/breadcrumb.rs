//! Breadcrumbs for the header row.

use crate::route::{decode_segment, path_segments};

/// A single breadcrumb link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
}

fn segment_label(segment: &str) -> Option<&'static str> {
    match segment.to_ascii_lowercase().as_str() {
        "application" => Some("Application"),
        "traces" => Some("Traces"),
        "service-map" => Some("Service Map"),
        "usage-explorer" => Some("Usage Explorer"),
        "settings" => Some("Settings"),
        "add-instrumentation" => Some("Add Instrumentation"),
        _ => None,
    }
}

/// Breadcrumbs for `path`, starting with Home.
///
/// Known sections get their display name; any other segment (service
/// names, trace ids) is shown percent-decoded; hrefs keep the raw text.
pub fn breadcrumbs(path: &str) -> Vec<Crumb> {
    let mut crumbs = vec![Crumb {
        label: "Home".to_string(),
        href: "/".to_string(),
    }];

    let mut href = String::new();
    for segment in path_segments(path) {
        href.push('/');
        href.push_str(segment);
        crumbs.push(Crumb {
            label: segment_label(segment)
                .map(str::to_string)
                .unwrap_or_else(|| decode_segment(segment)),
            href: href.clone(),
        });
    }

    crumbs
}
