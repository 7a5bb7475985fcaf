//! Settings and instrumentation onboarding.

use leptos::prelude::*;

use super::{PageFrame, PageManifest, css};
use crate::app::AppContext;

#[component]
pub fn SettingsPage(manifest: PageManifest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = Signal::derive(move || ctx.shell.with(|s| s.theme.name()));

    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Theme: " {theme}</p>
        </PageFrame>
    }
}

#[component]
pub fn InstrumentationPage(manifest: PageManifest) -> impl IntoView {
    view! {
        <PageFrame manifest=manifest>
            <p class=css::hint>
                "Point your OpenTelemetry exporter at the collector, then open "
                <code>"/traces"</code>
                " to see incoming spans."
            </p>
        </PageFrame>
    }
}
