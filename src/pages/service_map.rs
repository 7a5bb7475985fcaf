use leptos::prelude::*;

use super::{PageFrame, PageManifest};

#[component]
pub fn ServiceMap(manifest: PageManifest) -> impl IntoView {
    view! { <PageFrame manifest=manifest /> }
}
