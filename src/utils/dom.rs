//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Failures are logged and swallowed; navigation never panics.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current location path (e.g. `/login`), defaulting to `/`.
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .filter(|p| !p.is_empty())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new history entry for `path` without reloading.
///
/// Returns `false` if the History API rejected the call.
pub fn push_path(path: &str) -> bool {
    let pushed = window()
        .and_then(|w| w.history().ok())
        .map(|history| history.push_state_with_url(&JsValue::NULL, "", Some(path)))
        .is_some_and(|result| result.is_ok());
    if !pushed {
        log::warn!("history.pushState failed for {path}");
    }
    pushed
}

/// Go back one history entry. The browser reports the change via `popstate`.
pub fn history_back() {
    if let Some(window) = window()
        && let Ok(history) = window.history()
        && history.back().is_err()
    {
        log::warn!("history.back failed");
    }
}

/// Reload the current page.
pub fn reload_page() {
    if let Some(window) = window() {
        let _ = window.location().reload();
    }
}

// =============================================================================
// Document
// =============================================================================

/// Scroll the window to the top-left corner.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

/// Set `document.title`.
pub fn set_document_title(title: &str) {
    if let Some(document) = window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

/// Set the `lang` attribute of the root `<html>` element.
pub fn set_document_language(code: &str) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        && root.set_attribute("lang", code).is_err()
    {
        log::warn!("failed to set document language to {code}");
    }
}

/// Whether a click should be left to the browser (new tab, download, ...).
pub fn is_modified_click(event: &web_sys::MouseEvent) -> bool {
    event.button() != 0 || event.ctrl_key() || event.meta_key() || event.shift_key() || event.alt_key()
}

/// Check whether an event target lies inside `container`.
///
/// Targets that are not DOM nodes count as outside.
pub fn event_within(container: &web_sys::Element, event: &web_sys::Event) -> bool {
    event
        .target()
        .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
        .is_some_and(|node| container.contains(Some(&node)))
}
