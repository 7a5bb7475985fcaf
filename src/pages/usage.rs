use leptos::prelude::*;

use super::{PageFrame, PageManifest, css};
use crate::app::AppContext;

#[component]
pub fn UsageExplorer(manifest: PageManifest) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let window = Signal::derive(move || {
        let range = ctx.time_range.get();
        format!("{} ({} minutes)", range.label(), range.minutes())
    });

    view! {
        <PageFrame manifest=manifest>
            <p class=css::meta>"Window: " {window}</p>
        </PageFrame>
    }
}
