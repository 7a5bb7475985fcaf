//! Services overview and per-service metrics.

use leptos::prelude::*;

use super::{PageFrame, PageManifest, css};
use crate::app::AppContext;
use crate::components::Link;

#[component]
pub fn ServicesTable(manifest: PageManifest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let window = Signal::derive(move || ctx.time_range.get().label());

    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Window: " {window}</p>
            <p class=css::hint>
                "Open a service with "
                <Link href="/application/frontend">"/application/<service>"</Link>
            </p>
        </PageFrame>
    }
}

#[component]
pub fn ServiceMetrics(manifest: PageManifest, service: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let window = Signal::derive(move || ctx.time_range.get().label());

    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Service: " <strong>{service}</strong></p>
            <p class=css::meta>"Window: " {window}</p>
        </PageFrame>
    }
}
