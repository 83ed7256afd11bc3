use wasm_bindgen::{JsCast, JsValue};

/// Best effort text for a thrown JS value. DOM exceptions and `Error` objects yield their
/// message, anything else its debug rendering.
pub(crate) fn js_error_text(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }

    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", error.name(), error.message());
    }

    format!("{err:?}")
}
