//! Content region.
//!
//! Resolves the current location through the page loader and mounts the
//! matched page once its bundle is available. Load failures are thrown to a
//! local error boundary whose retry forgets the failed bundle.

use leptos::prelude::*;
use signoz_core::ContentView;

use crate::app::AppContext;
use crate::pages;

stylance::import_crate_style!(css, "src/components/content/content.module.css");

#[component]
pub fn PageContent() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let content = ctx.content;

    Effect::new(move |_| {
        let path = ctx.location.get();
        content.navigate(&path);
    });

    let page = move || match content.current() {
        ContentView::Empty => Ok(().into_any()),
        ContentView::Loading => Ok(view! { <Spinner /> }.into_any()),
        ContentView::Ready { module, route } => Ok(pages::render(&module, &route.params)),
        ContentView::Failed(err) => Err(err),
    };

    let on_retry = Callback::new(move |_: ()| {
        content.retry(&ctx.location.get_untracked());
    });

    view! {
        <div class=css::content>
            <ErrorBoundary fallback=move |errors| {
                let messages = Signal::derive(move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, e)| e.to_string())
                        .collect::<Vec<_>>()
                });
                view! { <ErrorFallback messages=messages on_retry=on_retry /> }
            }>
                {page}
            </ErrorBoundary>
        </div>
    }
}

/// Placeholder shown while a page bundle is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class=css::spinner role="status" aria-label="Loading">
            <span class=css::dot></span>
            <span class=css::dot></span>
            <span class=css::dot></span>
        </div>
    }
}

/// Displays load errors with a retry button.
#[component]
pub fn ErrorFallback(
    /// Error messages to display
    #[prop(into)]
    messages: Signal<Vec<String>>,
    /// Callback to reset and retry
    #[prop(into)]
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class=css::errorBox role="alert">
            <h2 class=css::errorTitle>"This page could not be loaded"</h2>
            <ul class=css::errorList>
                {move || {
                    messages
                        .get()
                        .into_iter()
                        .map(|message| view! { <li>{message}</li> })
                        .collect_view()
                }}
            </ul>
            <button class=css::retry on:click=move |_| on_retry.run(())>
                "Retry"
            </button>
        </div>
    }
}
