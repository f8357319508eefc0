//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Window};

use crate::core::error::AttachError;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the current document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Find the first element matching a CSS selector.
pub fn query(selector: &str) -> Result<Element, AttachError> {
    let window = window().ok_or(AttachError::NoWindow)?;
    let document = window.document().ok_or(AttachError::NoDocument)?;

    document
        .query_selector(selector)
        .map_err(|_| AttachError::InvalidSelector(selector.to_string()))?
        .ok_or_else(|| AttachError::NoMatch(selector.to_string()))
}

// =============================================================================
// JavaScript Interop
// =============================================================================

/// Call `target[method](...args)` through `Reflect`.
pub fn call_method(target: &JsValue, method: &str, args: &Array) -> Result<JsValue, JsValue> {
    let function = Reflect::get(target, &method.into())?.dyn_into::<Function>()?;
    function.apply(target, args)
}

/// Best-effort human readable text for a thrown JavaScript value.
///
/// Prefers `DOMException`-style `name: message`, then plain strings.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }

    let field = |key: &str| {
        Reflect::get(value, &key.into())
            .ok()
            .and_then(|v| v.as_string())
            .filter(|s| !s.is_empty())
    };

    match (field("name"), field("message")) {
        (Some(name), Some(message)) => format!("{}: {}", name, message),
        (Some(text), None) | (None, Some(text)) => text,
        (None, None) => format!("{:?}", value),
    }
}

/// Log a warning to the browser console.
pub fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}

/// Log an error to the browser console.
pub fn error(message: &str) {
    web_sys::console::error_1(&message.into());
}
