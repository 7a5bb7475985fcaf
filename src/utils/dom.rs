//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{HtmlLinkElement, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location as `pathname + search` (no fragment).
pub fn current_location() -> String {
    window()
        .map(|w| {
            let location = w.location();
            let path = location.pathname().unwrap_or_else(|_| "/".to_string());
            let search = location.search().unwrap_or_default();
            format!("{}{}", path, search)
        })
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new history entry without reloading the page.
pub fn push_location(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

// =============================================================================
// Stylesheets
// =============================================================================

/// Find the `<link>` with `id` in `<head>`, creating it if missing.
pub fn stylesheet_link(id: &str) -> Option<HtmlLinkElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(id) {
        return existing.dyn_into::<HtmlLinkElement>().ok();
    }

    let link = document
        .create_element("link")
        .ok()?
        .dyn_into::<HtmlLinkElement>()
        .ok()?;
    link.set_id(id);
    link.set_rel("stylesheet");
    document.head()?.append_child(&link).ok()?;
    Some(link)
}
