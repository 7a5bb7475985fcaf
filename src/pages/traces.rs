//! Trace list and single-trace graph.

use leptos::prelude::*;

use super::{PageFrame, PageManifest, css};
use crate::app::AppContext;

#[component]
pub fn TraceDetail(manifest: PageManifest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let window = Signal::derive(move || ctx.time_range.get().label());

    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Window: " {window}</p>
        </PageFrame>
    }
}

#[component]
pub fn TraceGraph(manifest: PageManifest, trace_id: String) -> impl IntoView {
    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Trace: " <code>{trace_id}</code></p>
        </PageFrame>
    }
}
