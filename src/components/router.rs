//! Application router component.
//!
//! Handles URL-based routing with the History API. Uses native popstate
//! events instead of leptos_router; route resolution itself lives in
//! [`signoz_core::RouteTable`].
//!
//! # Architecture
//!
//! - **`pathname + search` is the source of truth**: kept in `AppContext::location`
//! - **Shell never re-renders on navigation**: only the content region reacts
//! - **popstate events**: Browser back/forward buttons work automatically
//! - **[`Link`]**: in-app anchors that push history instead of reloading

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::shell::Shell;
#[cfg(target_arch = "wasm32")]
use crate::utils::dom;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// Keeps `AppContext::location` in sync with the browser history and renders
/// the [`Shell`], which stays mounted across navigations.
#[component]
pub fn AppRouter() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let ctx = use_context::<AppContext>().expect("AppContext must be provided");
        let closure = Closure::wrap(Box::new(move || {
            ctx.location.set(dom::current_location());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! { <Shell /> }
}

// ============================================================================
// Link
// ============================================================================

/// In-app anchor.
///
/// Plain clicks navigate through the History API; modified clicks (new tab,
/// new window) fall through to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional, into)] class: Option<Signal<String>>,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.default_prevented()
            || ev.button() != 0
            || ev.ctrl_key()
            || ev.meta_key()
            || ev.shift_key()
            || ev.alt_key()
        {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&target);
    };

    view! {
        <a href=href class=move || class.map(|c| c.get()) on:click=on_click>
            {children()}
        </a>
    }
}
