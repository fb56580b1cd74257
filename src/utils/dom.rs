//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error
//! handling. Anything that can fail degrades to a no-op or `None`.

use wasm_bindgen::JsCast;
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Read a query-string parameter from the current location.
pub fn query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Show a blocking confirmation dialog. Returns `false` when the dialog
/// cannot be shown.
pub fn confirm(message: &str) -> bool {
    window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

/// Trigger a browser download of `url` under `filename`.
///
/// Materializes a transient anchor, activates it programmatically, and
/// removes it again; no navigation happens beyond the download itself.
pub fn trigger_download(url: &str, filename: &str) {
    let Some(document) = window().and_then(|w| w.document()) else {
        return;
    };
    let Some(anchor) = document
        .create_element("a")
        .ok()
        .and_then(|e| e.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    else {
        return;
    };

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.set_target("_blank");

    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

/// Log a swallowed, non-fatal failure to the console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
