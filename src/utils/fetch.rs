//! Promise racing and page bundle requests.
//!
//! Both page bundles and theme stylesheets are bounded by a configured
//! timeout: the work is wrapped in a promise and raced against a
//! `setTimeout` promise.

use js_sys::{Array, Promise};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::FetchError;

// =============================================================================
// Promise Racing
// =============================================================================

/// How a raced promise ended.
#[derive(Debug)]
pub enum RaceResult {
    /// Settled first with this value (a `Response`, a `load` event, ...).
    Completed(JsValue),
    /// The timer fired first.
    TimedOut,
    /// Rejected first, e.g. a network failure or a stylesheet `error` event.
    Error(String),
}

/// Clamp a configured timeout to what `setTimeout` accepts.
fn timer_delay(timeout_ms: u32) -> i32 {
    i32::try_from(timeout_ms).unwrap_or(i32::MAX)
}

/// Human-readable text for a rejection value.
///
/// `fetch` rejects with a `TypeError`, `<link>` errors reject with the
/// `error` event itself.
fn describe_rejection(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    if let Some(event) = value.dyn_ref::<web_sys::Event>() {
        return format!("{} event", event.type_());
    }
    "Unknown error".to_string()
}

/// Race `promise` against a `timeout_ms` timer.
///
/// The timer resolves to `undefined`, so `promise` must settle with a
/// defined value to be reported as [`RaceResult::Completed`].
pub async fn race_with_timeout(promise: Promise, timeout_ms: u32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let delay = timer_delay(timeout_ms);
    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, delay);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(reason) => RaceResult::Error(describe_rejection(&reason)),
    }
}

// =============================================================================
// Page Bundles
// =============================================================================

/// GET `url` and parse the body as JSON, giving up after `timeout_ms`.
///
/// Bundles may live on another origin (`pages.base_url`), so the request is
/// made in CORS mode.
pub async fn fetch_json<T: DeserializeOwned>(url: &str, timeout_ms: u32) -> Result<T, FetchError> {
    let response = send_get(url, timeout_ms).await?;
    let body = read_text(&response).await?;
    serde_json::from_str(&body).map_err(|e| FetchError::JsonParseError(e.to_string()))
}

async fn send_get(url: &str, timeout_ms: u32) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    let response: Response = match race_with_timeout(window.fetch_with_request(&request), timeout_ms).await {
        RaceResult::Completed(value) => value.dyn_into().map_err(|_| FetchError::InvalidContent)?,
        RaceResult::TimedOut => return Err(FetchError::Timeout),
        RaceResult::Error(msg) => return Err(FetchError::NetworkError(msg)),
    };

    if !response.ok() {
        return Err(FetchError::HttpError(response.status()));
    }
    Ok(response)
}

async fn read_text(response: &Response) -> Result<String, FetchError> {
    let text = response.text().map_err(|_| FetchError::ResponseReadFailed)?;
    JsFuture::from(text)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?
        .as_string()
        .ok_or(FetchError::InvalidContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_delay_is_clamped() {
        assert_eq!(timer_delay(10_000), 10_000);
        assert_eq!(timer_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(timer_delay(u32::MAX), i32::MAX);
    }
}
