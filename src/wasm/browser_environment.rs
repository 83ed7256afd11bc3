use wasm_bindgen::JsValue;
use web_sys::{Document, Navigator, Window};

use crate::device::{EnvironmentError, HostEnvironment};

/// Reads device info from the globals of the current browsing context.
pub struct BrowserEnvironment {
    window: Window,
    navigator: Navigator,
    document: Document,
}

impl BrowserEnvironment {
    pub fn current() -> Result<Self, EnvironmentError> {
        let window = web_sys::window().ok_or(EnvironmentError::WindowUnavailable)?;
        let document = window
            .document()
            .ok_or(EnvironmentError::DocumentUnavailable)?;
        let navigator = window.navigator();

        Ok(Self {
            window,
            navigator,
            document,
        })
    }
}

impl HostEnvironment for BrowserEnvironment {
    fn user_agent(&self) -> Result<String, EnvironmentError> {
        self.navigator.user_agent().map_err(EnvironmentError::Js)
    }

    fn inner_width(&self) -> Result<f64, EnvironmentError> {
        viewport_dimension(self.window.inner_width(), "width")
    }

    fn inner_height(&self) -> Result<f64, EnvironmentError> {
        viewport_dimension(self.window.inner_height(), "height")
    }

    fn language(&self) -> Result<String, EnvironmentError> {
        Ok(language_or_empty(self.navigator.language()))
    }

    fn referrer(&self) -> Result<String, EnvironmentError> {
        Ok(self.document.referrer())
    }

    fn platform(&self) -> Result<String, EnvironmentError> {
        self.navigator.platform().map_err(EnvironmentError::Js)
    }
}

fn viewport_dimension(
    read: Result<JsValue, JsValue>,
    name: &'static str,
) -> Result<f64, EnvironmentError> {
    read.map_err(EnvironmentError::Js)?
        .as_f64()
        .ok_or(EnvironmentError::NonNumericDimension(name))
}

// Some embedded webviews leave `navigator.language` undefined
fn language_or_empty(language: Option<String>) -> String {
    language.unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_non_numeric_dimension_rejected() {
        let err = viewport_dimension(Ok(JsValue::UNDEFINED), "width").unwrap_err();
        assert!(matches!(err, EnvironmentError::NonNumericDimension("width")));

        let err = viewport_dimension(Ok(JsValue::from_str("1024")), "height").unwrap_err();
        assert!(matches!(err, EnvironmentError::NonNumericDimension("height")));

        let width = viewport_dimension(Ok(JsValue::from_f64(1280.0)), "width").unwrap();
        assert_eq!(width, 1280.0);
    }

    #[wasm_bindgen_test]
    fn test_thrown_dimension_kept() {
        let thrown: JsValue = js_sys::TypeError::new("detached").into();

        let err = viewport_dimension(Err(thrown.clone()), "width").unwrap_err();
        let EnvironmentError::Js(kept) = err else {
            panic!("expected the thrown value");
        };
        assert!(js_sys::Object::is(&kept, &thrown));
        assert!(kept.is_instance_of::<js_sys::TypeError>());
    }

    #[wasm_bindgen_test]
    fn test_missing_language_is_empty() {
        assert_eq!(language_or_empty(None), "");
        assert_eq!(language_or_empty(Some("fr-CA".into())), "fr-CA");
    }
}
