//! Header row: breadcrumbs on the left, time range selector on the right.

use leptos::logging::warn;
use leptos::prelude::*;
use signoz_core::{TimeRange, breadcrumbs};

use crate::app::AppContext;
use crate::components::Link;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn HeaderRow() -> impl IntoView {
    view! {
        <div class=css::row>
            <Breadcrumbs />
            <DateRangeSelector />
        </div>
    }
}

/// Breadcrumbs for the current location. The last crumb is not a link.
#[component]
fn Breadcrumbs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let crumbs = Memo::new(move |_| ctx.location.with(|path| breadcrumbs(path)));

    view! {
        <nav aria-label="Breadcrumb">
            <ol class=css::breadcrumbs>
                {move || {
                    let crumbs = crumbs.get();
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            if i == last {
                                view! { <li class=css::current aria-current="page">{crumb.label}</li> }
                                    .into_any()
                            } else {
                                view! {
                                    <li class=css::crumb>
                                        <Link href=crumb.href>{crumb.label}</Link>
                                    </li>
                                }
                                    .into_any()
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}

/// Shared time window for the pages.
#[component]
fn DateRangeSelector() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let on_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        match value.parse::<TimeRange>() {
            Ok(range) => ctx.time_range.set(range),
            Err(err) => warn!("{}", err),
        }
    };

    view! {
        <select
            class=css::select
            aria-label="Time range"
            prop:value=move || ctx.time_range.get().code()
            on:change=on_change
        >
            {TimeRange::ALL
                .into_iter()
                .map(|range| {
                    view! {
                        <option value=range.code() selected=move || ctx.time_range.get() == range>
                            {range.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
