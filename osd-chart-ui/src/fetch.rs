//! Runtime fetch of profile files served alongside the app.
//!
//! Profiles are fetched fresh on every hover event; there is no cache
//! between events or between sibling charts.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch a text resource by path relative to the app origin.
///
/// Errors are stringified for the per-chart error display; a failed fetch
/// must only take down the chart that requested it.
pub async fn fetch_text(path: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window object")?;

    let response_value = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|e| format!("fetch {} failed: {:?}", path, e))?;
    let response: Response = response_value
        .dyn_into()
        .map_err(|_| format!("fetch {}: not a Response", path))?;

    if !response.ok() {
        return Err(format!("fetch {}: HTTP {}", path, response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|e| format!("fetch {}: {:?}", path, e))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| format!("fetch {}: {:?}", path, e))?;

    text.as_string()
        .ok_or_else(|| format!("fetch {}: body is not text", path))
}
